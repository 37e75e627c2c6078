//! Core of strata: record metadata, field selection, type classification,
//! the unique-constraint and state-definer validators, and the registry they
//! populate during a configuration phase.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod obs;
pub mod registry;
pub mod select;
pub mod validate;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary needed to declare records and
/// configure them.
///

pub mod prelude {
    pub use crate::{
        builder::{EntityConfig, FieldHandle, ModelBuilder},
        model::{
            field::{FieldKind, FieldModel, Scalar},
            record::{RecordKind, RecordModel},
        },
        select::FieldSelector,
    };
}
