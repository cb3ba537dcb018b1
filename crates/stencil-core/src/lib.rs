//! Stencil Core - component scaffolding, ports and adapters style.
//!
//! This crate provides the domain and application layers for the Stencil
//! component generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │              (Generator)                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Filesystem, ArtifactRenderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │ (LocalFilesystem, ReactRenderer, JSON)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ComponentDescriptor, Identifier, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stencil_core::prelude::*;
//!
//! let template = Template::new().with_component(
//!     ComponentDescriptor::builder("card")
//!         .name("custom-card")
//!         .class("card-base")
//!         .prop(Prop::new("title", PropKind::primitive("string"))?)
//!         .build()?,
//! );
//!
//! let generator = Generator::new(renderer, filesystem, "components");
//! let report = generator.run(&template)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedComponent, GenerationReport, Generator,
        ports::{ArtifactRenderer, Filesystem},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactSet, ComponentDescriptor, Identifier, Prop, PropKind, Template,
    };
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
