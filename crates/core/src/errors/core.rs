use thiserror::Error;

use crate::config::ConfigError;

/// Core error type for the loam bootstrap layer
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid path alias: {alias}")]
    InvalidAlias { alias: String },

    #[error("Unable to find symbol '{symbol}' in file: {file}")]
    UnknownSymbol { symbol: String, file: String },

    #[error("Invalid object configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unknown property '{property}' on {type_name}")]
    UnknownProperty {
        property: String,
        type_name: String,
    },
}

impl CoreError {
    /// Create a new invalid alias error
    pub fn invalid_alias(alias: impl Into<String>) -> Self {
        Self::InvalidAlias {
            alias: alias.into(),
        }
    }

    /// Create a new unknown symbol error
    pub fn unknown_symbol(symbol: impl Into<String>, file: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
            file: file.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a new unknown property error
    pub fn unknown_property(property: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownProperty {
            property: property.into(),
            type_name: type_name.into(),
        }
    }

    /// Check if the error is an invalid alias error
    pub fn is_invalid_alias(&self) -> bool {
        matches!(self, Self::InvalidAlias { .. })
    }

    /// Check if the error is an unknown symbol error
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::UnknownSymbol { .. })
    }

    /// Check if the error is an invalid configuration error
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
