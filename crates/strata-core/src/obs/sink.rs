use crate::error::{DeclarationKind, ErrorKind};

///
/// ConfigEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigEvent {
    UniqueRegistered {
        record: &'static str,
        fields: Vec<&'static str>,
    },
    StateDefinersRegistered {
        record: &'static str,
        fields: Vec<&'static str>,
    },
    Rejected {
        record: Option<&'static str>,
        declaration: DeclarationKind,
        kind: ErrorKind,
        message: String,
    },
}

///
/// EventSink
///

pub trait EventSink: Send + Sync {
    fn record(&self, event: &ConfigEvent);
}

///
/// TracingSink
/// Default sink; forwards events to `tracing` under the `strata` target.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &ConfigEvent) {
        match event {
            ConfigEvent::UniqueRegistered { record, fields } => {
                tracing::debug!(target: "strata", record, ?fields, "unique constraint registered");
            }
            ConfigEvent::StateDefinersRegistered { record, fields } => {
                tracing::debug!(target: "strata", record, ?fields, "state definers registered");
            }
            ConfigEvent::Rejected {
                record,
                declaration,
                kind,
                message,
            } => {
                tracing::warn!(
                    target: "strata",
                    record = record.unwrap_or("-"),
                    %declaration,
                    %kind,
                    "declaration rejected: {message}"
                );
            }
        }
    }
}

///
/// NoopSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &ConfigEvent) {}
}
