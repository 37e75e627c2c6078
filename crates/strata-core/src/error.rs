use derive_more::Display;
use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// DeclarationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
pub enum DeclarationKind {
    #[display("unique")]
    Unique,

    #[display("state-definer")]
    StateDefiner,

    #[display("field-helper")]
    FieldHelper,
}

///
/// ErrorKind
///
/// Stable classification of a `ConfigError`.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum ErrorKind {
    DuplicateConstraint,
    DuplicateFieldName,
    EmptySelection,
    Frozen,
    InvalidFieldKind,
    RepeatedField,
    UnknownField,
}

///
/// ConfigError
///
/// Configuration-time failure of a single declaration.
/// A failed declaration never leaves a partial write behind.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("{declaration} declaration on '{record}' selects no fields")]
    EmptySelection {
        record: &'static str,
        declaration: DeclarationKind,
    },

    #[error("field '{field}' is declared more than once on '{record}'")]
    DuplicateFieldName {
        record: &'static str,
        field: &'static str,
    },

    #[error("field '{field}' is not declared on '{record}'")]
    UnknownField {
        record: &'static str,
        field: String,
    },

    #[error("field '{field}' is selected more than once on '{record}'")]
    RepeatedField {
        record: &'static str,
        field: &'static str,
    },

    #[error("field '{field}' on '{record}' cannot be used in a {declaration} declaration: {reason}")]
    InvalidFieldKind {
        record: &'static str,
        field: &'static str,
        declaration: DeclarationKind,
        reason: &'static str,
    },

    #[error("{declaration} declaration on '{record}' duplicates an existing one: ({})", .fields.join(", "))]
    DuplicateConstraint {
        record: &'static str,
        declaration: DeclarationKind,
        fields: Vec<&'static str>,
    },

    #[error("registry is frozen; no further declarations are accepted")]
    Frozen,
}

impl ConfigError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySelection { .. } => ErrorKind::EmptySelection,
            Self::DuplicateFieldName { .. } => ErrorKind::DuplicateFieldName,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
            Self::RepeatedField { .. } => ErrorKind::RepeatedField,
            Self::InvalidFieldKind { .. } => ErrorKind::InvalidFieldKind,
            Self::DuplicateConstraint { .. } => ErrorKind::DuplicateConstraint,
            Self::Frozen => ErrorKind::Frozen,
        }
    }

    /// Record path the error was raised against, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&'static str> {
        match self {
            Self::EmptySelection { record, .. }
            | Self::DuplicateFieldName { record, .. }
            | Self::UnknownField { record, .. }
            | Self::RepeatedField { record, .. }
            | Self::InvalidFieldKind { record, .. }
            | Self::DuplicateConstraint { record, .. } => Some(*record),
            Self::Frozen => None,
        }
    }

    #[must_use]
    pub fn display_with_kind(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}

///
/// ConfigErrors
///
/// Ordered collection of declaration failures, for callers that want to see
/// every mistake before aborting the configuration phase.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConfigErrors {
    errors: Vec<ConfigError>,
}

impl ConfigErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(ConfigError::kind).collect()
    }

    /// `Ok` when nothing was collected.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::error::Error for ConfigErrors {}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error.display_with_kind())?;
        }

        Ok(())
    }
}

///
/// TESTS
///
