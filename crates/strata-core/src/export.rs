//! Flat, serialisable view of the registry for introspection tooling.

use crate::{model::set::PropertiesWithSource, registry::MappingRegistry};
use serde::Serialize;

///
/// EntryKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryKind {
    Unique,
    StateDefiner,
}

///
/// RegistryEntry
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub type_name: String,
    pub kind: EntryKind,
    pub field_names: Vec<String>,
}

impl RegistryEntry {
    pub(crate) fn from_props(kind: EntryKind, props: &PropertiesWithSource) -> Self {
        Self {
            type_name: props.source.name().to_string(),
            kind,
            field_names: props
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Render the registry export as pretty-printed JSON.
pub fn export_json(registry: &MappingRegistry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&registry.export())
}

///
/// TESTS
///
