//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::types::ChangelogConfig;
use super::validation::validate_config;

/// Load configuration from a file
///
/// Files ending in `.toml` are parsed as TOML, everything else as YAML.
/// An empty document yields the defaults.
pub fn load_config(path: &Path) -> Result<ChangelogConfig> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config = parse_config(&content, format)?;

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

fn parse_config(content: &str, format: &str) -> Result<ChangelogConfig> {
    if content.trim().is_empty() {
        return Ok(ChangelogConfig::default());
    }

    let config = if format == "TOML" {
        toml::from_str(content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(content).map_err(ConfigError::YamlError)?
    };
    Ok(config)
}

/// Load configuration or use defaults
///
/// A missing file is not an error: the defaults are returned together with
/// `None` so the caller can tell the user. A file that exists but cannot be
/// read, parsed or validated is fatal.
pub fn load_config_or_default(path: &Path) -> Result<(ChangelogConfig, Option<PathBuf>)> {
    if !path.is_file() {
        info!(path = %path.display(), "config file not found, using defaults");
        return Ok((ChangelogConfig::default(), None));
    }

    let config = load_config(path)?;
    Ok((config, Some(path.to_path_buf())))
}

/// Write the starter configuration to `path`
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ConfigError::InvalidValue {
            field: "conf".to_string(),
            message: format!("{} already exists", path.display()),
        }
        .into());
    }

    std::fs::write(path, super::defaults::DEFAULT_CONFIG_TEMPLATE).map_err(ConfigError::Io)?;
    info!(path = %path.display(), "wrote starter config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClgenError;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".clog.yaml");
        std::fs::write(
            &config_path,
            "type_captures:\n  - '(\\w+):'\nsupported_types:\n  feat: Features\nheadings:\n  feat: Features\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.type_captures, vec![r"(\w+):".to_string()]);
        assert_eq!(
            config.supported_types.get("feat").map(String::as_str),
            Some("Features")
        );
        assert_eq!(config.others_heading, "Others");
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("clog.toml");
        std::fs::write(
            &config_path,
            "type_captures = ['(\\w+):']\ncapitalize_title_first_char = false\n\n[headings]\nfix = \"Bug Fixes\"\nfeat = \"Features\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(!config.capitalize_title_first_char);
        assert_eq!(config.headings.iter().count(), 2);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".clog.yaml");
        std::fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.type_captures.is_empty());
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_config_or_default(&temp.path().join(".clog.yaml")).unwrap();

        assert!(source.is_none());
        assert_eq!(config.breaking_changes_heading, "BREAKING CHANGES");
    }

    #[test]
    fn test_type_mismatch_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".clog.yaml");
        std::fs::write(&config_path, "capitalize_title_first_char: [1, 2]\n").unwrap();

        let result = load_config_or_default(&config_path);
        assert!(matches!(
            result,
            Err(ClgenError::Config(ConfigError::YamlError(_)))
        ));
    }

    #[test]
    fn test_invalid_regex_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".clog.yaml");
        std::fs::write(&config_path, "pre_captures:\n  - '[unclosed'\n").unwrap();

        let result = load_config_or_default(&config_path);
        assert!(matches!(
            result,
            Err(ClgenError::Config(ConfigError::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_write_default_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".clog.yaml");

        write_default_config(&config_path).unwrap();
        let config = load_config(&config_path).unwrap();
        assert!(!config.type_captures.is_empty());

        assert!(write_default_config(&config_path).is_err());
    }

    #[test]
    fn test_missing_config_is_not_logged_as_warning() {
        let temp = TempDir::new().unwrap();
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let (_, source) = tracing::subscriber::with_default(subscriber, || {
            load_config_or_default(&temp.path().join(".clog.yaml")).unwrap()
        });

        assert!(source.is_none());
        assert!(log.0.lock().unwrap().is_empty());
    }
}
