use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigFileError
///

#[derive(Debug, ThisError)]
pub enum ConfigFileError {
    #[error("failed to read builder config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse builder config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// ErrorPolicy
///
/// How batch declarations react to a failing declaration.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failure.
    #[default]
    FailFast,

    /// Apply every valid declaration and report all failures together.
    Collect,
}

///
/// BuilderConfig
///
/// ```toml
/// on_error = "collect"
/// trace_declarations = false
/// ```
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    pub on_error: ErrorPolicy,

    /// Emit a tracing event for every accepted or rejected declaration.
    pub trace_declarations: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            trace_declarations: true,
        }
    }
}

impl BuilderConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigFileError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    #[must_use]
    pub const fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    #[must_use]
    pub const fn with_tracing(mut self, trace_declarations: bool) -> Self {
        self.trace_declarations = trace_declarations;
        self
    }
}

///
/// TESTS
///
