//! Loads a JSON alias configuration mapping alternate spellings of keywords,
//! operators, builtins, and type names onto their canonical MoonLang forms.

mod error;

pub use error::ConfigError;

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// The four alias tables. `builtins` and `type_names` are accepted and
/// stored but never consulted by the lexer; they exist for later stages
/// and for tooling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasMap {
    pub keywords: HashMap<String, String>,
    pub operators: HashMap<String, String>,
    pub builtins: HashMap<String, String>,
    pub type_names: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawAliasFile {
    #[serde(default)]
    keywords: HashMap<String, Value>,
    #[serde(default)]
    operators: HashMap<String, Value>,
    #[serde(default)]
    builtins: HashMap<String, Value>,
    #[serde(default)]
    type_names: HashMap<String, Value>,
}

fn strings_only(table: HashMap<String, Value>) -> HashMap<String, String> {
    table
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect()
}

impl AliasMap {
    /// Parses an alias map from an already-read JSON document. Unknown
    /// top-level keys are ignored; non-string values inside a recognized
    /// table are dropped rather than failing the whole document.
    pub fn from_json(contents: &str) -> Result<AliasMap, serde_json::Error> {
        let raw: RawAliasFile = serde_json::from_str(contents)?;
        Ok(AliasMap {
            keywords: strings_only(raw.keywords),
            operators: strings_only(raw.operators),
            builtins: strings_only(raw.builtins),
            type_names: strings_only(raw.type_names),
        })
    }

    /// Loads and parses an alias file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<AliasMap, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        AliasMap::from_json(&contents).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_empty_tables() {
        let map = AliasMap::from_json("{}").unwrap();
        assert!(map.keywords.is_empty());
        assert!(map.operators.is_empty());
    }

    #[test]
    fn keeps_string_entries_and_drops_others() {
        let map = AliasMap::from_json(
            r#"{"keywords": {"si": "if", "bad": 1}, "unused_top_level": true}"#,
        )
        .unwrap();
        assert_eq!(map.keywords.get("si"), Some(&"if".to_string()));
        assert_eq!(map.keywords.get("bad"), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AliasMap::from_json("not json").is_err());
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = AliasMap::load("/nonexistent/path/to/aliases.json").unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
