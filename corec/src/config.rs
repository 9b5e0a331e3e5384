//! Configuration for the `corec` binary.
//!
//! Controls only ambient concerns (default verbosity, whether to print the
//! pretty-print prefix) — never language semantics. Searches the current
//! directory only: unlike a general-purpose CLI tool, `corec` has no
//! meaningful per-user or system-wide configuration to fall back to, so the
//! home/system search tiers are dropped.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "corec.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Raise the default logging verbosity to debug.
    #[serde(default)]
    pub verbose: bool,

    /// Print the pretty-print prefix on stdout before execution.
    #[serde(default = "default_true")]
    pub print_prefix: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            print_prefix: true,
        }
    }
}

impl Config {
    /// Load configuration from `corec.toml` in the current directory, or
    /// fall back to defaults if it is not present.
    pub fn load() -> anyhow::Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_prints_prefix_and_is_quiet() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.print_prefix);
    }

    #[test]
    fn load_from_path_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corec.toml");
        std::fs::write(&path, "verbose = true\nprint_prefix = false\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.verbose);
        assert!(!config.print_prefix);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let result = Config::load_from_path(Path::new("/nonexistent/corec.toml"));
        assert!(result.is_err());
    }
}
