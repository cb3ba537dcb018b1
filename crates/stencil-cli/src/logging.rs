//! Diagnostics on stderr.
//!
//! Only the three stencil crates are let through; dependencies stay silent
//! unless `RUST_LOG` asks for them.  Events raised while a component is being
//! written carry its `key` and `name` from the generator's span, so a line
//! reads like `generate_component_files{key=card name=custom-card}: ...`.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Targets that make up this tool: the binary and its two libraries.
const STENCIL_TARGETS: [&str; 3] = ["stencil", "stencil_core", "stencil_adapters"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogSettings {
    level: LevelFilter,
    /// Report each component span's duration when it closes.
    timings: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            (false, 2) => LevelFilter::DEBUG,
            (false, _) => LevelFilter::TRACE,
        };
        Self {
            level,
            timings: level == LevelFilter::TRACE,
            ansi: stderr_is_tty && !args.no_color,
        }
    }
}

/// `off` for everything except the stencil targets, which get `level`.
fn stencil_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let mut filter = EnvFilter::default().add_directive(LevelFilter::OFF.into());
    for target in STENCIL_TARGETS {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());

    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => stencil_filter(settings.level)?,
    };

    let span_events = if settings.timings {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_span_events(span_events)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}
