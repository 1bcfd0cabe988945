pub mod symbols;

pub use symbols::{LoadingStats, SymbolLoader};
