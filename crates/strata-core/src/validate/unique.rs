use crate::{
    error::{ConfigError, DeclarationKind},
    model::{
        field::FieldModel,
        record::SourceType,
        set::{FieldSet, PropertiesWithSource},
    },
    registry::MappingRegistry,
    select::{FieldSelector, resolve},
};

/// Declare that the selected fields of `source` are unique in combination.
///
/// Returns the registered field set.
pub fn mark_unique<S>(
    registry: &mut MappingRegistry,
    source: SourceType,
    selector: &S,
) -> Result<FieldSet, ConfigError>
where
    S: FieldSelector + ?Sized,
{
    let fields = resolve(source, DeclarationKind::Unique, selector)?;

    for field in &fields {
        check_field(source, field)?;
    }

    registry.add_unique(PropertiesWithSource::new(source, fields.clone()))?;

    Ok(fields)
}

// check_field
// uniqueness is only checkable on plain comparable values
pub(crate) fn check_field(source: SourceType, field: &FieldModel) -> Result<(), ConfigError> {
    let class = field.class();
    if class.is_value() {
        return Ok(());
    }

    let reason = if class.is_collection() {
        "collection fields cannot be part of a unique constraint"
    } else {
        "only scalar, enum or value fields can be unique"
    };

    Err(ConfigError::InvalidFieldKind {
        record: source.path(),
        field: field.name,
        declaration: DeclarationKind::Unique,
        reason,
    })
}

///
/// TESTS
///
