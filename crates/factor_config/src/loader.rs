//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::FactorConfig;
use std::path::Path;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "factor.toml";

/// Loads and validates `factor.toml` from a directory.
///
/// A missing file is not an error: the default configuration is returned.
pub fn load_config(dir: &Path) -> Result<FactorConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(FactorConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration file at an explicit path.
///
/// Unlike [`load_config`], the file must exist.
pub fn load_config_file(path: &Path) -> Result<FactorConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<FactorConfig, ConfigError> {
    let config: FactorConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
        reason: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks numeric settings against what the factorizer can honour.
///
/// `sieve.prewarm` is bounded by the sieve limit implied by
/// `limits.max_input`, not by `max_input` itself.
fn validate_config(config: &FactorConfig) -> Result<(), ConfigError> {
    let max = config.limits.max_input;
    if max < 1 {
        return Err(ConfigError::OutOfRange {
            field: "limits.max_input",
            value: max,
            reason: "must be at least 1".to_string(),
        });
    }
    if max > i64::MAX as u64 {
        return Err(ConfigError::OutOfRange {
            field: "limits.max_input",
            value: max,
            reason: format!("must not exceed {}", i64::MAX),
        });
    }
    let max_sieve = config.limits.max_sieve();
    if config.sieve.prewarm > max_sieve {
        return Err(ConfigError::OutOfRange {
            field: "sieve.prewarm",
            value: config.sieve.prewarm,
            reason: format!("must not exceed {max_sieve}, the square root of limits.max_input"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;
    use factor_common::{SieveStrategy, MAX_SAFE_INTEGER};

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.sieve.strategy, SieveStrategy::Rebuild);
        assert_eq!(config.sieve.prewarm, 0);
        assert_eq!(config.limits.max_input, MAX_SAFE_INTEGER);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[sieve]
strategy = "incremental"
prewarm = 1000

[limits]
max_input = 1000000

[output]
format = "json"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.sieve.strategy, SieveStrategy::Incremental);
        assert_eq!(config.sieve.prewarm, 1000);
        assert_eq!(config.limits.max_input, 1_000_000);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn zero_max_input_errors() {
        let toml = r#"
[limits]
max_input = 0
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert_eq!(err.field(), Some("limits.max_input"));
    }

    #[test]
    fn prewarm_above_sieve_bound_errors() {
        let toml = r#"
[sieve]
prewarm = 11

[limits]
max_input = 100
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "sieve.prewarm",
                value: 11,
                ..
            }
        ));
    }

    #[test]
    fn prewarm_at_sieve_bound_is_accepted() {
        let toml = r#"
[sieve]
prewarm = 10

[limits]
max_input = 100
"#;
        assert_eq!(load_config_from_str(toml).unwrap().sieve.prewarm, 10);
    }

    #[test]
    fn prewarm_is_bounded_by_default_sieve_limit() {
        let at = format!("[sieve]\nprewarm = {}\n", 94_906_265u64);
        assert_eq!(load_config_from_str(&at).unwrap().sieve.prewarm, 94_906_265);

        for past in [94_906_266u64, MAX_SAFE_INTEGER] {
            let toml = format!("[sieve]\nprewarm = {past}\n");
            let err = load_config_from_str(&toml).unwrap_err();
            assert_eq!(err.field(), Some("sieve.prewarm"));
        }
    }

    #[test]
    fn negative_max_input_is_a_parse_error() {
        let toml = r#"
[limits]
max_input = -3
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_in_dir_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.limits.max_input, MAX_SAFE_INTEGER);
    }

    #[test]
    fn load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[sieve]\nstrategy = \"incremental\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.sieve.strategy, SieveStrategy::Incremental);
    }

    #[test]
    fn io_error_from_nonexistent_file() {
        let err = load_config_file(Path::new("/nonexistent/dir/factor.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
