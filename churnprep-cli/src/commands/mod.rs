//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Both
//! commands resolve their configuration the same way: built-in defaults, then
//! the optional TOML file, then `CHURNPREP_*` environment variables. Command
//! line flags are applied last by the command itself.

use churnprep_core::PipelineConfig;
use log::debug;
use std::path::Path;

use crate::error::{CliErrorContext, CliResult};

/// Module containing the implementation of the `inspect` command.
pub mod inspect;
/// Module containing the implementation of the `run` command.
pub mod run;

pub use inspect::run_inspect;
pub use run::run_preprocess;

/// Defaults, then `config_file`, then the process environment.
pub fn load_config(config_file: Option<&Path>) -> CliResult<PipelineConfig> {
    load_config_with(config_file, |key| std::env::var(key).ok())
}

/// Like [`load_config`] with an explicit environment lookup.
pub fn load_config_with<F>(config_file: Option<&Path>, lookup: F) -> CliResult<PipelineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = PipelineConfig::default();
    if let Some(path) = config_file {
        debug!("Loading config file: {}", path.display());
        config
            .merge_file(path)
            .cli_with_context(|| format!("Failed to load config '{}'", path.display()))?;
    }
    config.apply_overrides_from(lookup);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use churnprep_core::EncodingMode;
    use churnprep_core::config::ENV_ENCODING;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_environment_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("churnprep.toml");
        fs::write(&path, "input = \"from_file.csv\"\nencoding = \"label\"\n").unwrap();

        let config = load_config_with(Some(&path), |key| {
            (key == ENV_ENCODING).then(|| "mapping".to_string())
        })
        .unwrap();

        assert_eq!(config.input, PathBuf::from("from_file.csv"));
        assert_eq!(config.encoding, EncodingMode::Mapping);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = load_config_with(Some(Path::new("/nonexistent/churnprep.toml")), |_| None);
        assert!(result.is_err());
    }
}
