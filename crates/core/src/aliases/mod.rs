pub mod registry;

pub use registry::{AliasRegistry, ALIAS_MARKER};
