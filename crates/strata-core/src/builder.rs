//! Configuration-phase entry points.
//!
//! A `ModelBuilder` owns one `MappingRegistry` for the duration of a
//! configuration phase. Declarations go in through `mark_unique`,
//! `mark_state_definer` and `field_helper` (directly, or per record through
//! `entity::<T>()`), and `finish` hands the frozen registry to its consumer.

use crate::{
    config::{BuilderConfig, ErrorPolicy},
    error::{ConfigError, ConfigErrors, DeclarationKind},
    model::{
        field::{FieldKind, FieldModel, TypeClass},
        record::{RecordKind, SourceType},
    },
    obs::{ConfigEvent, ConfigReport, EventSink, NoopSink, TracingSink},
    registry::MappingRegistry,
    select::{FieldSelector, resolve},
    validate,
};
use std::{fmt, marker::PhantomData};

///
/// ModelBuilder
///

pub struct ModelBuilder {
    registry: MappingRegistry,
    config: BuilderConfig,
    report: ConfigReport,
    sink: Box<dyn EventSink>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        let sink: Box<dyn EventSink> = if config.trace_declarations {
            Box::new(TracingSink)
        } else {
            Box::new(NoopSink)
        };

        Self {
            registry: MappingRegistry::new(),
            config,
            report: ConfigReport::default(),
            sink,
        }
    }

    /// Replace the event sink (the report is still kept by the builder).
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[must_use]
    pub const fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn report(&self) -> &ConfigReport {
        &self.report
    }

    /// End the configuration phase and hand the registry to its consumer.
    #[must_use]
    pub fn finish(self) -> MappingRegistry {
        self.registry
    }

    /// Per-record configuration handle.
    pub fn entity<T: RecordKind>(&mut self) -> EntityConfig<'_, T> {
        EntityConfig {
            builder: self,
            _marker: PhantomData,
        }
    }

    // ==================== Declarations ====================

    /// Declare the selected fields of `T` unique in combination.
    pub fn mark_unique<T, S>(&mut self, selector: S) -> Result<(), ConfigError>
    where
        T: RecordKind,
        S: FieldSelector,
    {
        self.apply_unique(SourceType::of::<T>(), &selector)
    }

    /// Declare the selected reference fields of `T` as state definers.
    pub fn mark_state_definer<T, S>(&mut self, selector: S) -> Result<(), ConfigError>
    where
        T: RecordKind,
        S: FieldSelector,
    {
        self.apply_state_definer(SourceType::of::<T>(), &selector)
    }

    /// Resolve a single field of `T` for further per-field configuration.
    /// Only the first selected field is addressed by the handle.
    pub fn field_helper<T, S>(&mut self, selector: S) -> Result<FieldHandle<T>, ConfigError>
    where
        T: RecordKind,
        S: FieldSelector,
    {
        FieldHandle::resolve(&selector)
            .inspect_err(|err| self.reject(DeclarationKind::FieldHelper, err))
    }

    /// Apply a batch of declarations under the configured `ErrorPolicy`.
    pub fn declare_all<I>(&mut self, declarations: I) -> Result<(), ConfigErrors>
    where
        I: IntoIterator<Item = Declaration>,
    {
        let mut errs = ConfigErrors::new();

        for declaration in declarations {
            if let Err(err) = self.declare(&declaration) {
                errs.add(err);
                if self.config.on_error == ErrorPolicy::FailFast {
                    break;
                }
            }
        }

        errs.result()
    }

    /// Apply one type-erased declaration.
    pub fn declare(&mut self, declaration: &Declaration) -> Result<(), ConfigError> {
        let selector = declaration.fields.as_deref();

        match declaration.kind {
            DeclarationKind::Unique => self.apply_unique(declaration.source, &selector),
            DeclarationKind::StateDefiner => {
                self.apply_state_definer(declaration.source, &selector)
            }
            DeclarationKind::FieldHelper => {
                resolve(declaration.source, DeclarationKind::FieldHelper, &selector)
                    .map(|_| ())
                    .inspect_err(|err| self.reject(DeclarationKind::FieldHelper, err))
            }
        }
    }

    // ==================== Internals ====================

    fn apply_unique<S>(&mut self, source: SourceType, selector: &S) -> Result<(), ConfigError>
    where
        S: FieldSelector + ?Sized,
    {
        match validate::mark_unique(&mut self.registry, source, selector) {
            Ok(fields) => {
                self.emit(ConfigEvent::UniqueRegistered {
                    record: source.path(),
                    fields: fields.names(),
                });
                Ok(())
            }
            Err(err) => {
                self.reject(DeclarationKind::Unique, &err);
                Err(err)
            }
        }
    }

    fn apply_state_definer<S>(&mut self, source: SourceType, selector: &S) -> Result<(), ConfigError>
    where
        S: FieldSelector + ?Sized,
    {
        match validate::mark_state_definer(&mut self.registry, source, selector) {
            Ok(fields) => {
                self.emit(ConfigEvent::StateDefinersRegistered {
                    record: source.path(),
                    fields: fields.names(),
                });
                Ok(())
            }
            Err(err) => {
                self.reject(DeclarationKind::StateDefiner, &err);
                Err(err)
            }
        }
    }

    fn reject(&mut self, declaration: DeclarationKind, err: &ConfigError) {
        self.emit(ConfigEvent::Rejected {
            record: err.record(),
            declaration,
            kind: err.kind(),
            message: err.to_string(),
        });
    }

    fn emit(&mut self, event: ConfigEvent) {
        self.report.observe(&event);
        self.sink.record(&event);
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModelBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBuilder")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

///
/// EntityConfig
///
/// Configuration entry points bound to one record type.
///

pub struct EntityConfig<'a, T: RecordKind> {
    builder: &'a mut ModelBuilder,
    _marker: PhantomData<T>,
}

impl<T: RecordKind> EntityConfig<'_, T> {
    pub fn mark_unique(&mut self, selector: impl FieldSelector) -> Result<&mut Self, ConfigError> {
        self.builder.mark_unique::<T, _>(selector)?;

        Ok(self)
    }

    pub fn mark_state_definer(
        &mut self,
        selector: impl FieldSelector,
    ) -> Result<&mut Self, ConfigError> {
        self.builder.mark_state_definer::<T, _>(selector)?;

        Ok(self)
    }

    pub fn field_helper(&mut self, selector: impl FieldSelector) -> Result<FieldHandle<T>, ConfigError> {
        self.builder.field_helper::<T, _>(selector)
    }
}

///
/// FieldHandle
///
/// One resolved field of `T`, handed off for per-field configuration.
///

pub struct FieldHandle<T: RecordKind> {
    field: &'static FieldModel,
    _marker: PhantomData<T>,
}

impl<T: RecordKind> FieldHandle<T> {
    const fn new(field: &'static FieldModel) -> Self {
        Self {
            field,
            _marker: PhantomData,
        }
    }

    /// Resolve the first field named by `selector`, without recording
    /// anything anywhere.
    pub fn resolve<S>(selector: &S) -> Result<Self, ConfigError>
    where
        S: FieldSelector + ?Sized,
    {
        let source = SourceType::of::<T>();

        resolve(source, DeclarationKind::FieldHelper, selector)?
            .first()
            .copied()
            .map(Self::new)
            .ok_or(ConfigError::EmptySelection {
                record: source.path(),
                declaration: DeclarationKind::FieldHelper,
            })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    #[must_use]
    pub const fn kind(&self) -> &'static FieldKind {
        &self.field.kind
    }

    #[must_use]
    pub const fn class(&self) -> TypeClass {
        self.field.kind.class()
    }

    #[must_use]
    pub const fn model(&self) -> &'static FieldModel {
        self.field
    }

    #[must_use]
    pub fn source(&self) -> SourceType {
        SourceType::of::<T>()
    }
}

impl<T: RecordKind> Clone for FieldHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RecordKind> Copy for FieldHandle<T> {}

impl<T: RecordKind> fmt::Debug for FieldHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("record", &T::MODEL.path)
            .field("field", &self.field.name)
            .finish()
    }
}

///
/// Declaration
///
/// Type-erased declaration for batch application.
/// `fields: None` stands for an absent selector.
///

#[derive(Clone, Debug)]
pub struct Declaration {
    pub source: SourceType,
    pub kind: DeclarationKind,
    pub fields: Option<Vec<&'static str>>,
}

impl Declaration {
    #[must_use]
    pub fn unique<T: RecordKind>(fields: &[&'static str]) -> Self {
        Self::new::<T>(DeclarationKind::Unique, Some(fields.to_vec()))
    }

    #[must_use]
    pub fn state_definer<T: RecordKind>(fields: &[&'static str]) -> Self {
        Self::new::<T>(DeclarationKind::StateDefiner, Some(fields.to_vec()))
    }

    #[must_use]
    pub fn new<T: RecordKind>(kind: DeclarationKind, fields: Option<Vec<&'static str>>) -> Self {
        Self {
            source: SourceType::of::<T>(),
            kind,
            fields,
        }
    }
}

///
/// TESTS
///
