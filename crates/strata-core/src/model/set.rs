use crate::model::{field::FieldModel, record::SourceType};
use derive_more::{Deref, IntoIterator};
use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

///
/// FieldSet
///
/// Ordered fields produced by one selection.
/// Order is kept for display; equality checks go through `same_names`.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
pub struct FieldSet(#[into_iterator(owned, ref)] Vec<&'static FieldModel>);

impl FieldSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static FieldModel) {
        self.0.push(field);
    }

    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|field| field.name == name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|field| field.name).collect()
    }

    // name_set
    // order-independent view used for set equality
    fn name_set(&self) -> BTreeSet<&'static str> {
        self.0.iter().map(|field| field.name).collect()
    }

    /// Whether both sets name the same fields, disregarding order.
    #[must_use]
    pub fn same_names(&self, other: &Self) -> bool {
        self.name_set() == other.name_set()
    }

    /// Names in `self` that also appear in `other`, in `self`'s order.
    #[must_use]
    pub fn shared_names(&self, other: &Self) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|field| other.contains(field.name))
            .map(|field| field.name)
            .collect()
    }
}

impl From<Vec<&'static FieldModel>> for FieldSet {
    fn from(fields: Vec<&'static FieldModel>) -> Self {
        Self(fields)
    }
}

impl Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.names().join(", "))
    }
}

///
/// PropertiesWithSource
/// A field set bound to the record type it was resolved against.
///

#[derive(Clone, Debug)]
pub struct PropertiesWithSource {
    pub source: SourceType,
    pub fields: FieldSet,
}

impl PropertiesWithSource {
    #[must_use]
    pub const fn new(source: SourceType, fields: FieldSet) -> Self {
        Self { source, fields }
    }

    #[must_use]
    pub const fn empty(source: SourceType) -> Self {
        Self::new(source, FieldSet::new())
    }

    /// Same source type and the same field names, in any order.
    #[must_use]
    pub fn is_set_equal(&self, other: &Self) -> bool {
        self.source == other.source && self.fields.same_names(&other.fields)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.names()
    }
}

impl Display for PropertiesWithSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.fields)
    }
}

///
/// TESTS
///
