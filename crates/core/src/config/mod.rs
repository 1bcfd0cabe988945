pub mod bootstrap;
pub mod manifest;
pub mod validation;

pub use bootstrap::{BootstrapConfig, Environment, ValidationMode};
pub use manifest::Manifest;
pub use validation::ConfigError;
