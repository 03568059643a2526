use serde::Deserialize;

use crate::error::ConfigError;

/// Where the timeout of a read-after request is looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutScope {
    /// Inside the `$readAfterOpTime` sub-document, next to `ot`.
    /// A timeout alone does not make the optime optional.
    #[default]
    ReadAfter,
    /// At the top level of the command, as a sibling of `$readAfterOpTime`.
    /// Accepted with or without an optime.
    Command,
}

/// Parser configuration, parsed from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub timeout_scope: TimeoutScope,
}

impl ParserConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}
