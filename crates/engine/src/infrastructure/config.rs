//! Environment configuration.
//!
//! Every setting has a default; a value that fails to parse is logged and
//! replaced by its default rather than aborting the run.

use std::path::PathBuf;
use std::str::FromStr;

use ffrkdb_domain::{BoostMode, Rarity};

pub const DATA_DIR_VAR: &str = "FFRKDB_DATA_DIR";
pub const CRAFTING_FILE_VAR: &str = "FFRKDB_CRAFTING_FILE";
pub const ROSTER_FILE_VAR: &str = "FFRKDB_ROSTER_FILE";
pub const DEFAULT_RARITY_VAR: &str = "FFRKDB_DEFAULT_RARITY";
pub const BOOST_MODE_VAR: &str = "FFRKDB_BOOST_MODE";
pub const TABLE_ID_VAR: &str = "FFRKDB_TABLE_ID";
pub const OUTPUT_VAR: &str = "FFRKDB_OUTPUT";

const DEFAULT_TABLE_ID: &str = "table";

/// Element id of the grid, without the selector `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl AsRef<str>) -> Self {
        let id = id.as_ref().trim();
        let id = id.trim_start_matches('#');
        if id.is_empty() {
            Self(DEFAULT_TABLE_ID.to_string())
        } else {
            Self(id.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TableId {
    fn default() -> Self {
        Self(DEFAULT_TABLE_ID.to_string())
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub crafting_file: String,
    pub roster_file: String,
    pub default_rarity: Rarity,
    pub boost_mode: BoostMode,
    pub table_id: TableId,
    pub output: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            crafting_file: "abilities.json".to_string(),
            roster_file: "characters.json".to_string(),
            default_rarity: Rarity::default(),
            boost_mode: BoostMode::default(),
            table_id: TableId::default(),
            output: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let lookup = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            crafting_file: lookup(CRAFTING_FILE_VAR).unwrap_or(defaults.crafting_file),
            roster_file: lookup(ROSTER_FILE_VAR).unwrap_or(defaults.roster_file),
            default_rarity: parse_or(
                DEFAULT_RARITY_VAR,
                lookup(DEFAULT_RARITY_VAR),
                defaults.default_rarity,
            ),
            boost_mode: parse_or(
                BOOST_MODE_VAR,
                lookup(BOOST_MODE_VAR),
                defaults.boost_mode,
            ),
            table_id: lookup(TABLE_ID_VAR)
                .map(TableId::new)
                .unwrap_or(defaults.table_id),
            output: lookup(OUTPUT_VAR).map(PathBuf::from),
        }
    }

    pub fn crafting_path(&self) -> PathBuf {
        self.data_dir.join(&self.crafting_file)
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                key,
                value = %raw,
                error = %e,
                fallback = %default,
                "Invalid setting, using default"
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_rarity.stars(), 5);
        assert_eq!(config.boost_mode, BoostMode::PreMultiply);
        assert_eq!(config.crafting_path(), PathBuf::from("data/abilities.json"));
        assert!(config.output.is_none());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            (DATA_DIR_VAR, "/srv/ffrk"),
            (CRAFTING_FILE_VAR, "crafting.json"),
            (ROSTER_FILE_VAR, "roster.json"),
            (DEFAULT_RARITY_VAR, "3*"),
            (BOOST_MODE_VAR, "post"),
            (TABLE_ID_VAR, "#abilities"),
            (OUTPUT_VAR, "out.json"),
        ]);

        assert_eq!(config.roster_path(), PathBuf::from("/srv/ffrk/roster.json"));
        assert_eq!(config.crafting_path(), PathBuf::from("/srv/ffrk/crafting.json"));
        assert_eq!(config.default_rarity.stars(), 3);
        assert_eq!(config.boost_mode, BoostMode::PostMultiply);
        assert_eq!(config.table_id.as_str(), "abilities");
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[(DEFAULT_RARITY_VAR, "9"), (BOOST_MODE_VAR, "double")]);
        assert_eq!(config.default_rarity.stars(), 5);
        assert_eq!(config.boost_mode, BoostMode::PreMultiply);
    }

    #[test]
    fn table_id_strips_selector_prefix() {
        assert_eq!(TableId::new("#table").as_str(), "table");
        assert_eq!(TableId::new("characters").as_str(), "characters");
        assert_eq!(TableId::new(" # ").as_str(), "table");
    }
}
