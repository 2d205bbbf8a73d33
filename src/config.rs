use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub issues: IssuesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GitHubConfig {
    pub login: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IssuesConfig {
    /// Whitespace-separated special filter names, e.g. "Priority Component".
    pub special_filters: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "gh-issue-pages")
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Build a config from the host site's structured configuration data.
    /// Anything absent or malformed falls back to defaults rather than failing
    /// the build.
    pub fn from_site_data(data: &serde_json::Value) -> Self {
        let special_filters = data
            .get("issues")
            .and_then(|v| v.get("special_filters"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            github: GitHubConfig::default(),
            issues: IssuesConfig { special_filters },
        }
    }

    /// The raw special-filter configuration, defaulting to none.
    pub fn special_filter_names(&self) -> &str {
        self.issues.special_filters.as_deref().unwrap_or("")
    }

    /// Get the GitHub login from (in order): env var, config file
    pub fn github_login(&self) -> Result<String> {
        if let Ok(login) = std::env::var("GITHUB_LOGIN") {
            return Ok(login);
        }

        if let Some(login) = &self.github.login {
            return Ok(login.clone());
        }

        Err(Error::Auth(
            "No GitHub login found. Set GITHUB_LOGIN or add login to config".into(),
        ))
    }

    /// Get the GitHub secret from (in order): env var, config file
    pub fn github_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            return Ok(token);
        }

        if let Some(token) = &self.github.token {
            return Ok(token.clone());
        }

        Err(Error::Auth(
            "No GitHub token found. Set GITHUB_TOKEN or add token to config".into(),
        ))
    }
}
