use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::aliases::{AliasRegistry, ALIAS_MARKER};
use crate::config::{BootstrapConfig, Manifest};
use crate::errors::CoreError;
use crate::objects::ObjectConfig;

/// Namespace separator in fully qualified symbol names.
const NAMESPACE_SEPARATOR: &str = "::";

/// Loads object definitions for fully qualified symbol names.
///
/// A symbol like `app::widgets::Button` is located either through an
/// explicit symbol-map entry or by mapping its namespace path onto the
/// alias table (`@app/widgets/Button` plus the configured suffix). The
/// located file is a YAML document mapping symbol names to construction
/// recipes; one file may define several symbols. Loaded definitions
/// accumulate in an owned table and are never re-read from disk.
///
/// A symbol with no locatable source is not an error: the loader reports
/// `None` and the caller owns the unresolved-symbol condition.
pub struct SymbolLoader {
    aliases: AliasRegistry,
    symbol_map: HashMap<String, String>,
    definitions: HashMap<String, ObjectConfig>,
    config: BootstrapConfig,
    stats: LoadingStats,
}

impl SymbolLoader {
    /// Create a loader with default configuration.
    pub fn new(aliases: AliasRegistry) -> Self {
        Self::with_config(aliases, BootstrapConfig::default())
    }

    /// Create a loader with explicit configuration.
    pub fn with_config(aliases: AliasRegistry, config: BootstrapConfig) -> Self {
        Self {
            aliases,
            symbol_map: HashMap::new(),
            definitions: HashMap::new(),
            config,
            stats: LoadingStats::new(),
        }
    }

    /// Alias registry backing namespace resolution.
    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    /// Mutable alias registry access.
    pub fn aliases_mut(&mut self) -> &mut AliasRegistry {
        &mut self.aliases
    }

    /// Loader configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Map a symbol to a literal path or alias string, overriding namespace
    /// derivation. A later mapping for the same symbol replaces the earlier
    /// one.
    pub fn map_symbol(&mut self, symbol: impl Into<String>, location: impl Into<String>) {
        self.symbol_map.insert(symbol.into(), location.into());
    }

    /// Seed aliases and symbol mappings from a manifest, in document order.
    pub fn apply_manifest(&mut self, manifest: &Manifest) -> Result<(), CoreError> {
        for (name, path) in &manifest.aliases {
            self.aliases.register(name, path)?;
        }
        for (symbol, location) in &manifest.symbols {
            self.map_symbol(symbol.clone(), location.clone());
        }
        tracing::info!(
            aliases = manifest.aliases.len(),
            symbols = manifest.symbols.len(),
            "applied bootstrap manifest"
        );
        Ok(())
    }

    /// Definition previously loaded for `symbol`, if any.
    pub fn definition(&self, symbol: &str) -> Option<&ObjectConfig> {
        self.definitions.get(symbol)
    }

    /// Translate a symbol into the path of its definition file.
    ///
    /// Symbol-map entries are consulted first and resolve their alias in
    /// failing mode; a namespaced symbol otherwise derives an alias from its
    /// namespace path in non-failing mode. `Ok(None)` means the symbol has
    /// no locatable source.
    pub fn locate(&self, symbol: &str) -> Result<Option<String>, CoreError> {
        if let Some(location) = self.symbol_map.get(symbol) {
            let path = if location.starts_with(ALIAS_MARKER) {
                self.aliases.resolve(location)?
            } else {
                location.clone()
            };
            return Ok(Some(path));
        }
        if symbol.contains(NAMESPACE_SEPARATOR) {
            let alias = format!(
                "{ALIAS_MARKER}{}{}",
                symbol.replace(NAMESPACE_SEPARATOR, "/"),
                self.config.source_suffix
            );
            return Ok(self.aliases.try_resolve(&alias));
        }
        Ok(None)
    }

    /// Load the definition for `symbol`, reading its source file on first
    /// use.
    ///
    /// Returns `Ok(None)` when no source can be located or the located path
    /// is not a file. When the file parses but does not define the requested
    /// symbol, strict validation fails with [`CoreError::UnknownSymbol`];
    /// lenient validation logs a warning and reports `None`.
    pub fn load(&mut self, symbol: &str) -> Result<Option<&ObjectConfig>, CoreError> {
        if self.definitions.contains_key(symbol) {
            return Ok(self.definitions.get(symbol));
        }

        let Some(located) = self.locate(symbol)? else {
            tracing::trace!(symbol, "no definition source for symbol");
            return Ok(None);
        };
        if !Path::new(&located).is_file() {
            tracing::debug!(symbol, path = %located, "definition source missing, skipping");
            return Ok(None);
        }

        let started = Instant::now();
        let raw = fs::read_to_string(&located)?;
        let entries: BTreeMap<String, Value> = serde_yaml::from_str(&raw)?;
        for (name, value) in entries {
            let definition = ObjectConfig::from_value(value)?;
            self.definitions.insert(name, definition);
            self.stats.definitions_loaded += 1;
        }
        self.stats.files_loaded += 1;
        self.stats.load_time += started.elapsed();

        if !self.definitions.contains_key(symbol) {
            if self.config.validation.is_strict() {
                return Err(CoreError::unknown_symbol(symbol, located));
            }
            tracing::warn!(
                symbol,
                path = %located,
                "loaded file does not define the requested symbol"
            );
            return Ok(None);
        }

        tracing::debug!(symbol, path = %located, "symbol definition loaded");
        Ok(self.definitions.get(symbol))
    }

    /// Timing and volume counters for the load path.
    pub fn loading_stats(&self) -> &LoadingStats {
        &self.stats
    }
}

/// Counters for the definition loading path
#[derive(Debug, Clone, Default)]
pub struct LoadingStats {
    pub files_loaded: usize,
    pub definitions_loaded: usize,
    pub load_time: Duration,
}

impl LoadingStats {
    /// Create new loading stats
    pub fn new() -> Self {
        Self::default()
    }
}
