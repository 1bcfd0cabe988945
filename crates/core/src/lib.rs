pub mod aliases;
pub mod config;
pub mod errors;
pub mod loader;
pub mod objects;

// Re-export key types for convenience (specific exports to avoid ambiguity)
pub use aliases::{AliasRegistry, ALIAS_MARKER};
pub use config::{BootstrapConfig, ConfigError, Environment, Manifest, ValidationMode};
pub use errors::CoreError;
pub use loader::{LoadingStats, SymbolLoader};
pub use objects::{
    configure, object_vars, Configurable, Container, FactoryFn, Object, ObjectConfig,
    ObjectFactory, ObjectSpec, PropertyMap,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Framework information
pub const FRAMEWORK_NAME: &str = "loam";

/// Root alias pointing at the framework's own install directory.
pub const FRAMEWORK_ALIAS: &str = "@loam";

/// Get framework version
pub fn version() -> &'static str {
    VERSION
}

/// Get framework name
pub fn name() -> &'static str {
    FRAMEWORK_NAME
}
