use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.thirdparty-notice/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where the generated inputs are looked up.
    #[serde(default)]
    pub search: SearchConfig,
    /// HTTP settings for `--fetch`.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Hints for telling font groups apart from library groups.
    #[serde(default)]
    pub fonts: FontConfig,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    /// Extra roots searched after `--root` and before the built-in locations.
    #[serde(default)]
    pub roots: Vec<PathBuf>,
    #[serde(default = "default_metadata_name")]
    pub metadata_name: String,
    #[serde(default = "default_licenses_name")]
    pub licenses_name: String,
}

#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout, overridden by `--fetch-timeout`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct FontConfig {
    /// Lower-case substrings of font family names (e.g. `"mplus"`).
    #[serde(default = "default_font_families")]
    pub families: Vec<String>,
}

fn default_metadata_name() -> String {
    "third_party_license_metadata".to_string()
}

fn default_licenses_name() -> String {
    "third_party_licenses".to_string()
}

fn default_timeout_secs() -> f64 {
    8.0
}

fn default_user_agent() -> String {
    "ThirdPartyNoticeFetcher/1.0".to_string()
}

fn default_font_families() -> Vec<String> {
    vec!["mplus".to_string(), "yomogi".to_string()]
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            roots: Vec::new(),
            metadata_name: default_metadata_name(),
            licenses_name: default_licenses_name(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl FontConfig {
    /// Lower-case the hints and drop empty ones, which would match every name.
    pub fn normalize(&mut self) {
        self.families = self
            .families
            .iter()
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            families: default_font_families(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_root>/.thirdparty-notice/config.toml`
/// 3. `~/.config/thirdparty-notice/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_root.join(".thirdparty-notice").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("thirdparty-notice")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut config: Config =
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;
    config.fonts.normalize();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.search.metadata_name, "third_party_license_metadata");
        assert_eq!(cfg.search.licenses_name, "third_party_licenses");
        assert_eq!(cfg.fetch.timeout_secs, 8.0);
        assert_eq!(cfg.fonts.families, vec!["mplus", "yomogi"]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[fetch]
timeout_secs = 2.5
"#,
        )
        .unwrap();
        assert_eq!(cfg.fetch.timeout_secs, 2.5);
        assert_eq!(cfg.fetch.user_agent, "ThirdPartyNoticeFetcher/1.0");
        assert_eq!(cfg.search.licenses_name, "third_party_licenses");
        assert!(cfg.search.roots.is_empty());
    }

    #[test]
    fn test_project_config_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".thirdparty-notice");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[fonts]\nfamilies = [\"notosans\"]\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.fonts.families, vec!["notosans"]);
    }

    #[test]
    fn test_font_families_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[fonts]\nfamilies = [\"Noto\", \"\", \"  \", \"MPlus\"]\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(cfg.fonts.families, vec!["noto", "mplus"]);
    }

    #[test]
    fn test_override_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }
}
