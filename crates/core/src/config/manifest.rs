use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Externally supplied bootstrap seed tables.
///
/// `aliases` is applied in document order, so later entries may use aliases
/// introduced by earlier ones. `symbols` maps fully qualified symbol names
/// to literal paths or alias strings, consulted before namespace
/// derivation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    #[serde(default)]
    pub symbols: IndexMap<String, String>,
}

impl Manifest {
    /// Parse a manifest from a YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Read and parse a manifest file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::from_yaml_str(
            "aliases:\n  \"@app\": /srv/app\n  \"@app/views\": \"@app/rendered\"\nsymbols:\n  app::db::Connection: \"@app/db.yaml\"\n",
        )
        .unwrap();

        assert_eq!(manifest.aliases.len(), 2);
        // document order survives parsing
        assert_eq!(
            manifest.aliases.get_index(0),
            Some((&"@app".to_string(), &"/srv/app".to_string()))
        );
        assert_eq!(
            manifest.symbols["app::db::Connection"],
            "@app/db.yaml"
        );
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let manifest = Manifest::from_yaml_str("aliases:\n  \"@app\": /srv/app\n").unwrap();

        assert_eq!(manifest.aliases.len(), 1);
        assert!(manifest.symbols.is_empty());
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(Manifest::from_yaml_str("aliases: [not, a, map]").is_err());
    }
}
