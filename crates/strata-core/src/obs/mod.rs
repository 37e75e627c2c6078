//! Observability: declaration events, sinks and counters.
//!
//! Validators never log directly. The builder turns every outcome into a
//! `ConfigEvent`, counts it in its `ConfigReport`, and forwards it to the
//! installed `EventSink`.

pub mod report;
pub mod sink;

pub use report::ConfigReport;
pub use sink::{ConfigEvent, EventSink, NoopSink, TracingSink};
