use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::i18n::Language;
use crate::paths;

/// Default settings in the `[aduan]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AduanConfig {
    /// Base URL of the council chat service.
    pub endpoint: Option<String>,
    /// Language the session starts in (`en` or `ms`).
    pub language: Option<Language>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/aduan/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub aduan: AduanConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The chat service base URL.
    pub endpoint: String,
    /// The language the session starts in.
    pub language: Language,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub language: Option<Language>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options win over the config file; language falls back to English.
///
/// # Errors
///
/// Returns an error if no endpoint is configured or the endpoint is not an
/// http(s) URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.aduan.endpoint.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'endpoint'\n\n\
                 Please provide it via:\n  \
                 - CLI option: aduan --endpoint <url>\n  \
                 - Config file: Run 'aduan configure' to set up configuration"
            )
        })?;

    validate_endpoint(&endpoint)?;

    let language = options
        .language
        .or(config_file.aduan.language)
        .unwrap_or_default();

    Ok(ResolvedConfig { endpoint, language })
}

/// Checks that an endpoint is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: '{endpoint}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Invalid endpoint URL: '{endpoint}' (expected http:// or https://)");
    }
    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/aduan/config.toml`
    /// or `~/.config/aduan/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file location.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            aduan: AduanConfig {
                endpoint: Some("http://localhost:3000".to_string()),
                language: Some(Language::Ms),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_file_uses_language_codes() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            aduan: AduanConfig {
                endpoint: None,
                language: Some(Language::Ms),
            },
        };
        manager.save(&config).unwrap();

        let contents = fs::read_to_string(manager.config_path()).unwrap();
        assert!(contents.contains("[aduan]"));
        assert!(contents.contains("language = \"ms\""));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[aduan]\nlanguage = \"fr\"\n").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    // resolve_config tests

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            aduan: AduanConfig {
                endpoint: Some("https://aduan.example.my".to_string()),
                language: Some(Language::Ms),
            },
        }
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.endpoint, "https://aduan.example.my");
        assert_eq!(resolved.language, Language::Ms);
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let options = ResolveOptions {
            endpoint: Some("http://localhost:3000".to_string()),
            language: Some(Language::En),
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.endpoint, "http://localhost:3000");
        assert_eq!(resolved.language, Language::En);
    }

    #[test]
    fn test_resolve_config_language_defaults_to_english() {
        let options = ResolveOptions {
            endpoint: Some("http://localhost:3000".to_string()),
            language: None,
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

        assert_eq!(resolved.language, Language::En);
    }

    #[test]
    fn test_resolve_config_missing_endpoint() {
        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("http://localhost:3000").is_ok());
        assert!(validate_endpoint("https://aduan.example.my/").is_ok());
        assert!(validate_endpoint("localhost:3000").is_err());
        assert!(validate_endpoint("ftp://example.com").is_err());
        assert!(validate_endpoint("").is_err());
    }
}
