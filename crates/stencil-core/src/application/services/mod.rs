//! Application services - orchestrate use cases.

pub mod generator;

pub use generator::{GeneratedComponent, GenerationReport, Generator};
