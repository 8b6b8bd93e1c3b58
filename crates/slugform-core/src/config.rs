use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which slugifier the CLI uses by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugStyle {
    /// Keystroke pipeline: ASCII word characters and hyphens, non-ASCII dropped.
    #[default]
    Browser,
    /// Transliterating pipeline joined with `delimiter`.
    Ascii,
}

/// Where a quantity stepper finds its parts, relative to the clicked control
/// (optional `[stepper]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepperConfig {
    /// Container searched upward from the clicked control.
    pub container_selector: String,
    /// Quantity field, first match inside the container.
    pub field_selector: String,
    /// Decrement control(s) inside the container.
    pub decrease_selector: String,
    /// Attribute on a control holding `increase` or `decrease`.
    pub action_attribute: String,
    /// Class marking the decrement control inactive.
    pub inactive_class: String,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            container_selector: ".quantity".to_string(),
            field_selector: "input".to_string(),
            decrease_selector: "[data-action=decrease]".to_string(),
            action_attribute: "data-action".to_string(),
            inactive_class: "inactive".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/slugform/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugformConfig {
    /// Default slugifier for `slugform slug`.
    #[serde(default)]
    pub slug_style: SlugStyle,
    /// Word delimiter for the ascii style.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Optional stepper layout; if missing, built-in defaults are used.
    #[serde(default)]
    pub stepper: Option<StepperConfig>,
}

fn default_delimiter() -> String {
    "-".to_string()
}

impl Default for SlugformConfig {
    fn default() -> Self {
        Self {
            slug_style: SlugStyle::Browser,
            delimiter: default_delimiter(),
            stepper: None,
        }
    }
}

impl SlugformConfig {
    /// Stepper layout from config, or the defaults.
    pub fn stepper_or_default(&self) -> StepperConfig {
        self.stepper.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("slugform")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SlugformConfig> {
    load_from(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_from(path: &Path) -> Result<SlugformConfig> {
    if !path.exists() {
        let default_cfg = SlugformConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: SlugformConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = SlugformConfig::default();
        assert_eq!(cfg.slug_style, SlugStyle::Browser);
        assert_eq!(cfg.delimiter, "-");
        assert!(cfg.stepper.is_none());
        assert_eq!(cfg.stepper_or_default().inactive_class, "inactive");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SlugformConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SlugformConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.slug_style, cfg.slug_style);
        assert_eq!(parsed.delimiter, cfg.delimiter);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: SlugformConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.slug_style, SlugStyle::Browser);
        assert_eq!(cfg.delimiter, "-");
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            slug_style = "ascii"
            delimiter = "_"

            [stepper]
            container_selector = ".qty"
            field_selector = "input.count"
            decrease_selector = ".minus"
            action_attribute = "data-step"
            inactive_class = "disabled"
        "#;
        let cfg: SlugformConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.slug_style, SlugStyle::Ascii);
        assert_eq!(cfg.delimiter, "_");
        let stepper = cfg.stepper_or_default();
        assert_eq!(stepper.container_selector, ".qty");
        assert_eq!(stepper.field_selector, "input.count");
        assert_eq!(stepper.decrease_selector, ".minus");
        assert_eq!(stepper.action_attribute, "data-step");
        assert_eq!(stepper.inactive_class, "disabled");
    }

    #[test]
    fn load_from_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.delimiter, "-");
        assert!(path.exists());

        fs::write(&path, "slug_style = \"ascii\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.slug_style, SlugStyle::Ascii);
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "slug_style = 3").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }
}
