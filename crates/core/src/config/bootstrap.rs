use std::env;
use std::str::FromStr;

use crate::config::ConfigError;

/// Environment enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::invalid_value(
                "environment",
                s,
                "development, testing, or production",
            )),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let env_str = match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        };
        write!(f, "{}", env_str)
    }
}

impl Environment {
    /// Check if environment is development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Check if environment is testing
    pub fn is_testing(&self) -> bool {
        matches!(self, Environment::Testing)
    }

    /// Check if environment is production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Get debug mode status based on environment
    pub fn debug_mode(&self) -> bool {
        !self.is_production()
    }

    /// Validation mode implied by the environment: strict while debugging,
    /// lenient in production.
    pub fn default_validation(&self) -> ValidationMode {
        if self.debug_mode() {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

/// Controls how the loader reacts to a definition file that loads cleanly
/// but fails to define the symbol it was loaded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Fail with an unknown symbol error.
    Strict,
    /// Log a warning and report the symbol as unresolved.
    Lenient,
}

impl ValidationMode {
    /// Check if the mode is strict
    pub fn is_strict(&self) -> bool {
        matches!(self, ValidationMode::Strict)
    }

    /// Check if the mode is lenient
    pub fn is_lenient(&self) -> bool {
        matches!(self, ValidationMode::Lenient)
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "lenient" => Ok(ValidationMode::Lenient),
            _ => Err(ConfigError::invalid_value(
                "validation",
                s,
                "strict or lenient",
            )),
        }
    }
}

/// Bootstrap configuration for the symbol loader
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub environment: Environment,
    pub validation: ValidationMode,
    /// File suffix appended when deriving a definition path from a
    /// namespaced symbol.
    pub source_suffix: String,
}

const DEFAULT_SOURCE_SUFFIX: &str = ".yaml";

impl BootstrapConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            validation: ValidationMode::Strict,
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
        }
    }

    /// Create configuration for production
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            validation: ValidationMode::Lenient,
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
        }
    }

    /// Load configuration from `LOAM_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match read_env("LOAM_ENV")? {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };
        let validation = match read_env("LOAM_VALIDATION")? {
            Some(raw) => raw.parse()?,
            None => environment.default_validation(),
        };
        let source_suffix =
            read_env("LOAM_SOURCE_SUFFIX")?.unwrap_or_else(|| DEFAULT_SOURCE_SUFFIX.to_string());

        Ok(Self {
            environment,
            validation,
            source_suffix,
        })
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::environment_error(format!("{key}: {err}"))),
    }
}
