use crate::{error::ErrorKind, obs::sink::ConfigEvent};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// ConfigReport
/// Counters for one configuration phase.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ConfigReport {
    pub unique_registered: u64,
    pub state_definer_calls: u64,
    pub state_definer_fields: u64,
    pub rejected: u64,

    /// Rejections per error kind.
    pub rejected_by_kind: BTreeMap<ErrorKind, u64>,
}

impl ConfigReport {
    pub(crate) fn observe(&mut self, event: &ConfigEvent) {
        match event {
            ConfigEvent::UniqueRegistered { .. } => {
                self.unique_registered = self.unique_registered.saturating_add(1);
            }
            ConfigEvent::StateDefinersRegistered { fields, .. } => {
                self.state_definer_calls = self.state_definer_calls.saturating_add(1);
                self.state_definer_fields = self
                    .state_definer_fields
                    .saturating_add(fields.len() as u64);
            }
            ConfigEvent::Rejected { kind, .. } => {
                self.rejected = self.rejected.saturating_add(1);
                let entry = self.rejected_by_kind.entry(*kind).or_default();
                *entry = entry.saturating_add(1);
            }
        }
    }

    #[must_use]
    pub const fn accepted(&self) -> u64 {
        self.unique_registered
            .saturating_add(self.state_definer_calls)
    }
}

///
/// TESTS
///
