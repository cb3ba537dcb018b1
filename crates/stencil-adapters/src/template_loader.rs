//! JSON template loader.
//!
//! Reads a `template.json` document and converts it into a domain
//! [`Template`] ready for the generator.
//!
//! # `template.json` format
//!
//! ```json
//! {
//!   "card": {
//!     "name": "custom-card",
//!     "class": "card-base",
//!     "props": {
//!       "title": "string",
//!       "variant": ["primary", "secondary"],
//!       "subtitle?": "string",
//!       "onClose": { "type": "() => void", "optional": true }
//!     }
//!   }
//! }
//! ```
//!
//! Prop values are a type name, a list of string literals (union), or an
//! object with `type` (either of the former) and `optional`. A trailing `?`
//! on the prop key also marks it optional; `?` anywhere else is rejected.
//! Entry and prop order follow the document.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use stencil_core::{
    application::ApplicationError,
    domain::{ComponentDescriptor, DomainError, Prop, PropKind, Template},
    error::{StencilError, StencilResult},
};

/// Suffix marking a prop optional in the JSON input.
pub const OPTIONAL_MARKER: char = '?';

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one component entry.
///
/// Fields are optional here so that a missing field is reported as
/// [`DomainError::MissingRequiredField`] with the entry key, instead of a
/// generic serde message.
#[derive(Debug, Deserialize, Clone)]
pub struct ComponentEntry {
    pub name: Option<String>,
    pub class: Option<String>,
    /// Kept as a raw map so each prop can be diagnosed by name.
    pub props: Option<Map<String, Value>>,
}

/// Accepted shapes of a prop value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropEntry {
    /// `"string"`
    Primitive(String),
    /// `["a", "b"]`
    Union(Vec<String>),
    /// `{ "type": ..., "optional": true }`
    Detailed {
        #[serde(rename = "type")]
        kind: PropTypeEntry,
        #[serde(default)]
        optional: bool,
    },
}

/// The `type` field of [`PropEntry::Detailed`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PropTypeEntry {
    Primitive(String),
    Union(Vec<String>),
}

impl From<PropTypeEntry> for PropKind {
    fn from(entry: PropTypeEntry) -> Self {
        match entry {
            PropTypeEntry::Primitive(name) => PropKind::Primitive(name),
            PropTypeEntry::Union(variants) => PropKind::Union(variants),
        }
    }
}

impl PropEntry {
    /// Split into the domain kind and the explicit optional flag.
    fn into_parts(self) -> (PropKind, bool) {
        match self {
            Self::Primitive(name) => (PropKind::Primitive(name), false),
            Self::Union(variants) => (PropKind::Union(variants), false),
            Self::Detailed { kind, optional } => (kind.into(), optional),
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`Template`] from a JSON file.
///
/// # Example
///
/// ```no_run
/// use stencil_adapters::JsonTemplateLoader;
///
/// let template = JsonTemplateLoader::new("template.json").load()?;
/// println!("Loaded {} components", template.len());
/// # Ok::<(), stencil_core::error::StencilError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonTemplateLoader {
    path: PathBuf,
}

impl JsonTemplateLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the template file.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::TemplateNotFound`] if the file does not exist.
    /// - [`ApplicationError::TemplateLoad`] if it cannot be read or is not
    ///   valid JSON.
    /// - A [`StencilError::Component`] naming the entry for any invalid
    ///   component.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> StencilResult<Template> {
        let raw = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
                path: self.path.clone(),
            },
            _ => ApplicationError::TemplateLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        })?;

        parse_template(&raw).map_err(|e| match e {
            StencilError::Application(ApplicationError::MalformedTemplate { reason }) => {
                ApplicationError::TemplateLoad {
                    path: self.path.clone(),
                    reason,
                }
                .into()
            }
            other => other,
        })
    }
}

/// Parse template JSON text.
pub fn parse_template(raw: &str) -> StencilResult<Template> {
    let document: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
    let Value::Object(entries) = document else {
        return Err(malformed("top level must be an object of components".into()));
    };

    let mut template = Template::new();
    for (key, value) in entries {
        let descriptor =
            parse_component(&key, value).map_err(|e| StencilError::component(&key, e))?;
        debug!(key = %key, props = descriptor.props().len(), "parsed component");
        template.push(descriptor);
    }

    debug!(count = template.len(), "finished parsing template");
    Ok(template)
}

fn parse_component(key: &str, value: Value) -> StencilResult<ComponentDescriptor> {
    let entry: ComponentEntry = serde_json::from_value(value)
        .map_err(|e| malformed(format!("entry is not a component object: {e}")))?;

    let name = entry
        .name
        .ok_or(DomainError::MissingRequiredField { field: "name" })?;
    let class = entry
        .class
        .ok_or(DomainError::MissingRequiredField { field: "class" })?;
    let props = entry
        .props
        .ok_or(DomainError::MissingRequiredField { field: "props" })?;

    let props = props
        .into_iter()
        .map(|(raw_name, value)| parse_prop(&raw_name, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComponentDescriptor::builder(key)
        .name(name)
        .class(class)
        .props(props)
        .build()?)
}

/// Convert one `"name?": value` pair into a [`Prop`].
fn parse_prop(raw_name: &str, value: Value) -> Result<Prop, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProp {
        prop: raw_name.to_owned(),
        reason: reason.to_owned(),
    };

    let (name, marked_optional) = match raw_name.strip_suffix(OPTIONAL_MARKER) {
        Some(stripped) => (stripped, true),
        None => (raw_name, false),
    };
    if name.contains(OPTIONAL_MARKER) {
        return Err(invalid("'?' is only allowed as the last character"));
    }

    let entry: PropEntry = serde_json::from_value(value).map_err(|_| {
        invalid("expected a type name, a list of string literals, or {\"type\": ..., \"optional\": ...}")
    })?;
    let (kind, flagged_optional) = entry.into_parts();

    Ok(Prop::new(name, kind)?.with_optional(marked_optional || flagged_optional))
}

fn malformed(reason: String) -> StencilError {
    ApplicationError::MalformedTemplate { reason }.into()
}
