//! Field selection.
//!
//! A selector names one or more direct fields of a record type. Resolution
//! turns those names into the record's declared `FieldModel`s, keeping the
//! order the caller wrote them in.

use crate::{
    error::{ConfigError, DeclarationKind},
    model::{record::SourceType, set::FieldSet},
};

///
/// FieldSelector
///
/// Anything that can name fields of a record.
/// `None` from `field_names` means the selector itself is absent.
///

pub trait FieldSelector {
    fn field_names(&self) -> Option<Vec<&str>>;
}

impl FieldSelector for &str {
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(vec![*self])
    }
}

impl FieldSelector for String {
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(vec![self.as_str()])
    }
}

impl<const N: usize> FieldSelector for [&str; N] {
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.to_vec())
    }
}

impl FieldSelector for &[&str] {
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.to_vec())
    }
}

impl FieldSelector for Vec<&str> {
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.clone())
    }
}

impl<S: FieldSelector> FieldSelector for Option<S> {
    fn field_names(&self) -> Option<Vec<&str>> {
        self.as_ref().and_then(FieldSelector::field_names)
    }
}

/// Resolve a selector against the declared fields of `source`.
///
/// Fails with `EmptySelection` when the selector is absent or names nothing,
/// `UnknownField` when a name is not a direct field of the record,
/// `RepeatedField` when the same field is named twice, and
/// `DuplicateFieldName` when the record model itself declares a name twice.
pub fn resolve<S>(
    source: SourceType,
    declaration: DeclarationKind,
    selector: &S,
) -> Result<FieldSet, ConfigError>
where
    S: FieldSelector + ?Sized,
{
    let record = source.path();
    if let Some(field) = source.model().duplicate_field() {
        return Err(ConfigError::DuplicateFieldName { record, field });
    }

    let names = selector
        .field_names()
        .filter(|names| !names.is_empty())
        .ok_or(ConfigError::EmptySelection {
            record,
            declaration,
        })?;

    let mut fields = FieldSet::new();
    for name in names {
        let field = source
            .model()
            .field(name)
            .ok_or_else(|| ConfigError::UnknownField {
                record,
                field: name.to_string(),
            })?;

        if fields.contains(field.name) {
            return Err(ConfigError::RepeatedField {
                record,
                field: field.name,
            });
        }

        fields.push(field);
    }

    Ok(fields)
}

///
/// TESTS
///
