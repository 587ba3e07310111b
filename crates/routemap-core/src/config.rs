use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::{UrlSanitizer, DEFAULT_FALLBACK_URL};

/// Global configuration loaded from `~/.config/routemap/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutemapConfig {
    /// Absolute URL substituted when a candidate URL cannot be parsed.
    pub fallback_url: String,
    /// Default content registry (JSON array of records) when none is given on the command line.
    pub registry: Option<PathBuf>,
    /// Site base URL handed to the renderer.
    pub baseurl: String,
    /// Whether the site is being served locally; handed to the renderer.
    pub local: bool,
}

impl Default for RoutemapConfig {
    fn default() -> Self {
        Self {
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            registry: None,
            baseurl: "/".to_string(),
            local: false,
        }
    }
}

impl RoutemapConfig {
    /// URL sanitizer using the configured fallback.
    pub fn sanitizer(&self) -> Result<UrlSanitizer> {
        UrlSanitizer::new(&self.fallback_url).context("config: fallback_url")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("routemap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RoutemapConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<RoutemapConfig> {
    if !path.exists() {
        let default_cfg = RoutemapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RoutemapConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = RoutemapConfig::default();
        assert_eq!(cfg.fallback_url, "https://gitlab.com");
        assert!(cfg.registry.is_none());
        assert_eq!(cfg.baseurl, "/");
        assert!(!cfg.local);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RoutemapConfig {
            registry: Some(PathBuf::from("public/content.json")),
            ..RoutemapConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RoutemapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            fallback_url = "https://example.org/"
            local = true
        "#;
        let cfg: RoutemapConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fallback_url, "https://example.org/");
        assert!(cfg.local);
        assert_eq!(cfg.baseurl, "/");
        assert!(cfg.registry.is_none());
    }

    #[test]
    fn sanitizer_rejects_bad_fallback() {
        let cfg = RoutemapConfig {
            fallback_url: "gitlab".to_string(),
            ..RoutemapConfig::default()
        };
        assert!(cfg.sanitizer().is_err());
        assert!(RoutemapConfig::default().sanitizer().is_ok());
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, RoutemapConfig::default());
        assert!(path.exists());

        fs::write(&path, "baseurl = \"/docs/\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.baseurl, "/docs/");
        assert_eq!(loaded.fallback_url, DEFAULT_FALLBACK_URL);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "local = \"yes\"\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
