//! The mapping registry.
//!
//! Accumulates validated unique-constraint sets and state-definer lists per
//! record type. Writes go through the validators only; readers get
//! enumeration and per-record lookups.

use crate::{
    error::{ConfigError, DeclarationKind},
    export::{EntryKind, RegistryEntry},
    model::{
        record::SourceType,
        set::{FieldSet, PropertiesWithSource},
    },
};
use std::collections::BTreeMap;

///
/// MappingRegistry
///
/// Invariants:
/// - no two unique-constraint sets are set-equal
/// - each record has at most one state-definer entry, with no repeated names
///

#[derive(Clone, Debug, Default)]
pub struct MappingRegistry {
    unique_constraints: Vec<PropertiesWithSource>,
    state_definers: BTreeMap<SourceType, PropertiesWithSource>,
}

impl MappingRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unique_constraints: Vec::new(),
            state_definers: BTreeMap::new(),
        }
    }

    // ==================== Writes ====================

    /// Append a unique-constraint set unless a set-equal one already exists.
    pub(crate) fn add_unique(&mut self, candidate: PropertiesWithSource) -> Result<(), ConfigError> {
        if self
            .unique_constraints
            .iter()
            .any(|existing| existing.is_set_equal(&candidate))
        {
            return Err(ConfigError::DuplicateConstraint {
                record: candidate.source.path(),
                declaration: DeclarationKind::Unique,
                fields: candidate.field_names(),
            });
        }

        self.unique_constraints.push(candidate);

        Ok(())
    }

    /// Append state-definer fields for `source`.
    /// Any overlap with already registered fields rejects the whole call.
    pub(crate) fn add_state_definers(
        &mut self,
        source: SourceType,
        fields: FieldSet,
    ) -> Result<(), ConfigError> {
        if let Some(existing) = self.state_definers.get(&source) {
            let overlap = fields.shared_names(&existing.fields);

            if !overlap.is_empty() {
                return Err(ConfigError::DuplicateConstraint {
                    record: source.path(),
                    declaration: DeclarationKind::StateDefiner,
                    fields: overlap,
                });
            }
        }

        self.state_definers
            .entry(source)
            .or_insert_with(|| PropertiesWithSource::empty(source))
            .fields
            .extend(fields);

        Ok(())
    }

    // ==================== Reads ====================

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unique_constraints.is_empty() && self.state_definers.is_empty()
    }

    /// All unique-constraint sets, in registration order.
    pub fn unique_constraints(&self) -> impl Iterator<Item = &PropertiesWithSource> {
        self.unique_constraints.iter()
    }

    /// Unique-constraint sets for one record, in registration order.
    pub fn unique_constraints_for(
        &self,
        source: SourceType,
    ) -> impl Iterator<Item = &PropertiesWithSource> {
        self.unique_constraints
            .iter()
            .filter(move |props| props.source == source)
    }

    /// All state-definer entries, ordered by record path.
    pub fn state_definers(&self) -> impl Iterator<Item = &PropertiesWithSource> {
        self.state_definers.values()
    }

    #[must_use]
    pub fn state_definer_for(&self, source: SourceType) -> Option<&PropertiesWithSource> {
        self.state_definers.get(&source)
    }

    /// Record types with at least one declaration, ordered by path.
    #[must_use]
    pub fn sources(&self) -> Vec<SourceType> {
        let mut sources: Vec<_> = self
            .unique_constraints
            .iter()
            .map(|props| props.source)
            .chain(self.state_definers.keys().copied())
            .collect();
        sources.sort();
        sources.dedup();

        sources
    }

    /// Flat export of every registered declaration: unique sets in
    /// registration order, then state-definer lists ordered by record.
    #[must_use]
    pub fn export(&self) -> Vec<RegistryEntry> {
        let unique = self
            .unique_constraints
            .iter()
            .map(|props| RegistryEntry::from_props(EntryKind::Unique, props));
        let state = self
            .state_definers
            .values()
            .map(|props| RegistryEntry::from_props(EntryKind::StateDefiner, props));

        unique.chain(state).collect()
    }
}

///
/// TESTS
///
