//! TOML configuration.
//!
//! ```toml
//! strategy = "heuristic"
//!
//! [search]
//! max_iterations = 50000
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use terrapath_paths::{SearchConfig, StrategyKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Strategy used when none is given on the command line.
    pub strategy: StrategyKind,
    pub search: SearchConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.strategy, StrategyKind::UniformCost);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn full() {
        let config = Config::from_toml(
            r#"
            strategy = "heuristic"

            [search]
            max_iterations = 50000
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, StrategyKind::Heuristic);
        assert_eq!(config.search.max_iterations, 50_000);
    }

    #[test]
    fn partial_search_table() {
        let config = Config::from_toml("[search]\n").unwrap();
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn rejects_unknown_strategy_and_keys() {
        assert!(Config::from_toml(r#"strategy = "dfs""#).is_err());
        assert!(Config::from_toml("max_iterations = 5").is_err());
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("/nonexistent/terrapath.toml")).unwrap_err();
        assert!(format!("{err:#}").starts_with("reading config /nonexistent/terrapath.toml"));
    }
}
