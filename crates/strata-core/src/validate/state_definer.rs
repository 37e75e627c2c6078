use crate::{
    error::{ConfigError, DeclarationKind},
    model::{
        field::{FieldModel, TypeClass},
        record::SourceType,
        set::FieldSet,
    },
    registry::MappingRegistry,
    select::{FieldSelector, resolve},
};

/// Declare that the persistence state of `source` depends on the records
/// held by the selected fields.
///
/// Successful calls for the same record accumulate into one ordered list.
/// Returns the fields appended by this call.
pub fn mark_state_definer<S>(
    registry: &mut MappingRegistry,
    source: SourceType,
    selector: &S,
) -> Result<FieldSet, ConfigError>
where
    S: FieldSelector + ?Sized,
{
    let fields = resolve(source, DeclarationKind::StateDefiner, selector)?;

    for field in &fields {
        check_field(source, field)?;
    }

    registry.add_state_definers(source, fields.clone())?;

    Ok(fields)
}

// check_field
// only record references, or collections of them, carry persistence state
pub(crate) fn check_field(source: SourceType, field: &FieldModel) -> Result<(), ConfigError> {
    let reason = match field.class() {
        class if class.is_reference() => return Ok(()),
        TypeClass::Collection(item) => match item.class() {
            class if class.is_reference() => return Ok(()),
            TypeClass::BuiltinScalar(_) => "collections of built-in scalars have no state",
            _ => "collection elements must be record references",
        },
        _ => "value fields have no persistence state of their own",
    };

    Err(ConfigError::InvalidFieldKind {
        record: source.path(),
        field: field.name,
        declaration: DeclarationKind::StateDefiner,
        reason,
    })
}

///
/// TESTS
///
