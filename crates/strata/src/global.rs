//! Process-wide registry.
//!
//! Created lazily on first use and shared by every caller. Each declaration
//! runs under the write lock, so duplicate detection holds even when
//! configuration calls race. `freeze` ends the configuration phase; after it
//! the registry only accepts reads.

use std::sync::{LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use strata_core::{
    builder::{Declaration, FieldHandle, ModelBuilder},
    error::{ConfigError, ConfigErrors},
    export::RegistryEntry,
    obs::ConfigReport,
    model::record::RecordKind,
    registry::MappingRegistry,
    select::FieldSelector,
};

///
/// BUILDER
/// the shared configuration state
///

static BUILDER: LazyLock<RwLock<ModelBuilder>> = LazyLock::new(|| RwLock::new(ModelBuilder::new()));

static FROZEN: OnceLock<()> = OnceLock::new();

// builder_write
fn builder_write() -> RwLockWriteGuard<'static, ModelBuilder> {
    BUILDER
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

// builder_read
fn builder_read() -> RwLockReadGuard<'static, ModelBuilder> {
    BUILDER
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

// open_builder
// write guard, unless the phase has ended
fn open_builder() -> Result<RwLockWriteGuard<'static, ModelBuilder>, ConfigError> {
    let guard = builder_write();
    if is_frozen() {
        return Err(ConfigError::Frozen);
    }

    Ok(guard)
}

pub fn mark_unique<T, S>(selector: S) -> Result<(), ConfigError>
where
    T: RecordKind,
    S: FieldSelector,
{
    open_builder()?.mark_unique::<T, S>(selector)
}

pub fn mark_state_definer<T, S>(selector: S) -> Result<(), ConfigError>
where
    T: RecordKind,
    S: FieldSelector,
{
    open_builder()?.mark_state_definer::<T, S>(selector)
}

/// Resolve one field of `T`. Never touches the registry, so it keeps
/// working after `freeze`; from then on rejections are no longer reported.
pub fn field_helper<T, S>(selector: S) -> Result<FieldHandle<T>, ConfigError>
where
    T: RecordKind,
    S: FieldSelector,
{
    match open_builder() {
        Ok(mut builder) => builder.field_helper::<T, S>(selector),
        Err(_) => FieldHandle::resolve(&selector),
    }
}

pub fn declare_all<I>(declarations: I) -> Result<(), ConfigErrors>
where
    I: IntoIterator<Item = Declaration>,
{
    open_builder()?.declare_all(declarations)
}

/// End the configuration phase. Idempotent.
pub fn freeze() {
    let _guard = builder_write();
    if FROZEN.set(()).is_ok() {
        tracing::debug!(target: "strata", "global registry frozen");
    }
}

#[must_use]
pub fn is_frozen() -> bool {
    FROZEN.get().is_some()
}

/// Read the registry contents.
pub fn with_registry<R>(f: impl FnOnce(&MappingRegistry) -> R) -> R {
    f(builder_read().registry())
}

/// Counters for the configuration phase so far.
#[must_use]
pub fn report() -> ConfigReport {
    builder_read().report().clone()
}

#[must_use]
pub fn export() -> Vec<RegistryEntry> {
    with_registry(MappingRegistry::export)
}
