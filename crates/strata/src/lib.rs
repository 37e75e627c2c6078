//! ## Crate layout
//! - `core`: record metadata, selectors, classifier, validators, registry.
//! - `global`: the process-wide registry shared by every configuration call.
//!
//! Most callers configure through an explicit `ModelBuilder` (one per
//! configuration phase). The `global` module serves code that has no builder
//! to hand around.

pub use strata_core as core;

pub mod global;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use strata_core::{
    builder::{Declaration, EntityConfig, FieldHandle, ModelBuilder},
    config::{BuilderConfig, ErrorPolicy},
    error::{ConfigError, ConfigErrors, DeclarationKind, ErrorKind},
    export::{EntryKind, RegistryEntry, export_json},
    registry::MappingRegistry,
};

///
/// Prelude
/// Everything needed to declare record models and configure them.
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::{ConfigError, Declaration, MappingRegistry};
}
