use crate::error::UpdateError;
use crate::release::ReleaseSource;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_ORG: &str = "interlynk-io";
pub const DEFAULT_DOWNLOAD_BASE: &str = "https://github.com";

/// Everything one run needs, resolved up front and passed by value.
#[derive(Debug, Clone)]
pub struct Config {
    pub repo: String,
    pub version: String,
    pub file: PathBuf,
    pub dry_run: bool,
    pub org: String,
    pub download_base: String,
}

impl Config {
    pub fn new(repo: &str, version: &str, file: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.to_string(),
            version: version.to_string(),
            file: file.into(),
            dry_run: false,
            org: DEFAULT_ORG.to_string(),
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
        }
    }

    /// Reject the run before any file or network I/O.
    pub fn validate(&self) -> Result<(), UpdateError> {
        if !self.version.starts_with('v') {
            return Err(UpdateError::InvalidVersion(self.version.clone()));
        }
        if !self.file.exists() {
            return Err(UpdateError::MissingFormula(self.file.clone()));
        }
        Ok(())
    }

    pub fn release(&self) -> ReleaseSource {
        ReleaseSource::new(&self.download_base, &self.org, &self.repo)
    }
}

/// Optional defaults read from `~/.brewup/config.toml` or `--config`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub org: Option<String>,
    pub download_base: Option<String>,
}

impl Settings {
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".brewup").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_checks_prefix_before_file() {
        let config = Config::new("sbomasm", "1.0.4", "/definitely/not/here.rb");
        assert!(matches!(config.validate(), Err(UpdateError::InvalidVersion(_))));

        let config = Config::new("sbomasm", "v1.0.4", "/definitely/not/here.rb");
        assert!(matches!(config.validate(), Err(UpdateError::MissingFormula(_))));
    }

    #[test]
    fn test_settings_parse() {
        let settings = Settings::parse("org = \"acme\"\ndownload_base = \"https://mirror.example.com\"\n").unwrap();
        assert_eq!(settings.org.as_deref(), Some("acme"));
        assert_eq!(settings.download_base.as_deref(), Some("https://mirror.example.com"));

        assert!(Settings::parse("").unwrap().org.is_none());
        assert!(Settings::parse("repo = \"sbomasm\"\n").is_err());
    }

    #[tokio::test]
    async fn test_explicit_settings_file_must_exist() {
        let err = Settings::load(Some(Path::new("/definitely/not/brewup.toml")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read settings file"));
    }
}
