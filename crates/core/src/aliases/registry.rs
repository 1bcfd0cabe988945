use std::collections::{BTreeMap, HashMap};

use crate::errors::CoreError;

/// Leading character that marks a string as a path alias.
pub const ALIAS_MARKER: char = '@';

/// Path separator used inside alias strings, independent of the host OS.
const SEPARATOR: char = '/';

/// Target of a registered root alias.
///
/// A root maps either to a single concrete path, or to a table of longer
/// alias names sharing the root prefix once more than one has been
/// registered under it.
#[derive(Debug, Clone)]
enum AliasTarget {
    Path(String),
    Nested(BTreeMap<String, String>),
}

/// Registry translating path aliases like `@app/views` into concrete paths.
///
/// Aliases form a hierarchy: `@app/widgets` may be registered independently
/// of `@app`, and resolution always picks the longest registered name that
/// matches the query on a `/` boundary, so `@app/widgets/button` resolves
/// through `@app/widgets` while `@app/widgetsx` falls back to `@app`.
///
/// The registry is plain owned data with no interior locking; a threaded
/// host must serialize mutations externally.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    table: HashMap<String, AliasTarget>,
}

impl AliasRegistry {
    /// Create a registry seeded with the framework root alias.
    pub fn new(framework_path: impl Into<String>) -> Self {
        let mut registry = Self::empty();
        let path = framework_path.into();
        registry.table.insert(
            crate::FRAMEWORK_ALIAS.to_string(),
            AliasTarget::Path(path.trim_end_matches(SEPARATOR).to_string()),
        );
        registry
    }

    /// Create a registry with no aliases registered.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register an alias, replacing any previous registration of the same name.
    ///
    /// A name without the leading marker gets it prepended. A target that is
    /// itself an alias is resolved immediately, so the table only ever holds
    /// concrete paths; a literal target loses its trailing separator.
    pub fn register(&mut self, name: &str, path: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Err(CoreError::invalid_alias(name));
        }
        let name = Self::normalize(name);
        let path = if path.starts_with(ALIAS_MARKER) {
            self.resolve(path)?
        } else {
            path.trim_end_matches(SEPARATOR).to_string()
        };
        let root = Self::root_of(&name).to_string();
        tracing::debug!(alias = %name, path = %path, "registering path alias");

        match self.table.get_mut(&root) {
            Some(AliasTarget::Nested(nested)) => {
                nested.insert(name, path);
            }
            Some(target) => {
                if let AliasTarget::Path(existing) = target {
                    if name == root {
                        *existing = path;
                    } else {
                        let mut nested = BTreeMap::new();
                        nested.insert(root.clone(), existing.clone());
                        nested.insert(name, path);
                        *target = AliasTarget::Nested(nested);
                    }
                }
            }
            None => {
                let target = if name == root {
                    AliasTarget::Path(path)
                } else {
                    let mut nested = BTreeMap::new();
                    nested.insert(name, path);
                    AliasTarget::Nested(nested)
                };
                self.table.insert(root, target);
            }
        }
        Ok(())
    }

    /// Remove a registered alias. Unknown names are ignored.
    pub fn unregister(&mut self, name: &str) {
        let name = Self::normalize(name);
        let root = Self::root_of(&name).to_string();
        tracing::trace!(alias = %name, "unregistering path alias");
        let remove_root = match self.table.get_mut(&root) {
            Some(AliasTarget::Path(_)) => name == root,
            Some(AliasTarget::Nested(nested)) => {
                nested.remove(&name);
                nested.is_empty()
            }
            None => false,
        };
        if remove_root {
            self.table.remove(&root);
        }
    }

    /// Translate an alias into a concrete path.
    ///
    /// A string that does not start with the alias marker is not an alias
    /// and is returned unchanged. Translation fails with
    /// [`CoreError::InvalidAlias`] when no registered alias matches.
    pub fn resolve(&self, alias: &str) -> Result<String, CoreError> {
        self.try_resolve(alias)
            .ok_or_else(|| CoreError::invalid_alias(alias))
    }

    /// Non-failing variant of [`AliasRegistry::resolve`]: returns `None`
    /// when the alias cannot be translated.
    pub fn try_resolve(&self, alias: &str) -> Option<String> {
        if !alias.starts_with(ALIAS_MARKER) {
            // not an alias
            return Some(alias.to_string());
        }
        let (root, remainder) = Self::split(alias);
        match self.table.get(root)? {
            AliasTarget::Path(path) => Some(format!("{path}{remainder}")),
            AliasTarget::Nested(entries) => {
                let (name, path) = Self::longest_match(entries, alias)?;
                Some(format!("{path}{}", &alias[name.len()..]))
            }
        }
    }

    /// Return the registered alias name that a query resolves through,
    /// without translating it. Used for introspection.
    pub fn root_alias_of(&self, alias: &str) -> Option<String> {
        let (root, _) = Self::split(alias);
        match self.table.get(root)? {
            AliasTarget::Path(_) => Some(root.to_string()),
            AliasTarget::Nested(entries) => {
                Self::longest_match(entries, alias).map(|(name, _)| name.to_string())
            }
        }
    }

    /// Check whether an alias name is registered.
    pub fn contains(&self, name: &str) -> bool {
        let name = Self::normalize(name);
        match self.table.get(Self::root_of(&name)) {
            Some(AliasTarget::Path(_)) => name == Self::root_of(&name),
            Some(AliasTarget::Nested(nested)) => nested.contains_key(&name),
            None => false,
        }
    }

    /// Number of registered alias names.
    pub fn len(&self) -> usize {
        self.table
            .values()
            .map(|target| match target {
                AliasTarget::Path(_) => 1,
                AliasTarget::Nested(nested) => nested.len(),
            })
            .sum()
    }

    /// Check whether the registry has no aliases at all.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn normalize(name: &str) -> String {
        if name.starts_with(ALIAS_MARKER) {
            name.to_string()
        } else {
            format!("{ALIAS_MARKER}{name}")
        }
    }

    /// Split an alias at the first separator; the remainder keeps it.
    fn split(alias: &str) -> (&str, &str) {
        match alias.find(SEPARATOR) {
            Some(pos) => alias.split_at(pos),
            None => (alias, ""),
        }
    }

    fn root_of(name: &str) -> &str {
        Self::split(name).0
    }

    /// Longest registered name matching `alias` on a separator boundary.
    ///
    /// Every entry is scanned, so the result does not depend on table order.
    fn longest_match<'a>(
        entries: &'a BTreeMap<String, String>,
        alias: &str,
    ) -> Option<(&'a str, &'a str)> {
        let mut best: Option<(&str, &str)> = None;
        for (name, path) in entries {
            if !Self::boundary_match(alias, name) {
                continue;
            }
            if best.map_or(true, |(current, _)| name.len() > current.len()) {
                best = Some((name, path));
            }
        }
        best
    }

    /// Prefix match that refuses to split a path segment: `@foo/bar` matches
    /// `@foo/bar/config` but not `@foo/barbar/config`.
    fn boundary_match(alias: &str, name: &str) -> bool {
        match alias.strip_prefix(name) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
            None => false,
        }
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }
}
