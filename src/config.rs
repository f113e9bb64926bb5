use crate::nav::NavOptions;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Indigo,
    Green,
    Rose,
    #[default]
    Orange,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 4] = [Self::Orange, Self::Indigo, Self::Green, Self::Rose];

    pub fn label(self) -> &'static str {
        match self {
            Self::Indigo => "Indigo",
            Self::Green => "Green",
            Self::Rose => "Rose",
            Self::Orange => "Orange",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system preference
    #[default]
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [Self::Light, Self::Dark, Self::Auto];

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Classic,
    Dense,
}

impl LayoutType {
    pub const ALL: [LayoutType; 2] = [Self::Classic, Self::Dense];

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Dense => "Dense",
        }
    }
}

/// Persisted dashboard preferences
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub ui: UiConfig,
    pub navigation: NavigationConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "lenient")]
    pub color: ThemeColor,
    #[serde(deserialize_with = "lenient")]
    pub mode: ThemeMode,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Sidebar layout: "classic" or "dense"
    #[serde(deserialize_with = "lenient")]
    pub layout: LayoutType,
}

/// Sidebar menu behaviour
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Open the menu that contains the current page on navigation
    #[serde(deserialize_with = "lenient_flag")]
    pub auto_expand_active: bool,
    /// Opening one menu closes the others
    #[serde(deserialize_with = "lenient_flag")]
    pub collapse_others_on_expand: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            auto_expand_active: true,
            collapse_others_on_expand: true,
        }
    }
}

/// An unrecognised value falls back to the field default instead of failing
/// the whole file.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value.clone()).unwrap_or_else(|e| {
        log::warn!("ignoring config value {} ({})", value, e);
        T::default()
    }))
}

// Both navigation flags default to on
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or_else(|| {
        log::warn!("ignoring config value {}, expected true or false", value);
        true
    }))
}

impl AppConfig {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gatze")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the platform config dir, or defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Load configuration from `path`. An unreadable or unparseable file gives
    /// the defaults; a bad value only resets its own field.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{} ({}); using default configuration", e, path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        log::debug!("saved configuration to {}", path.display());
        Ok(())
    }

    pub fn set_theme_color(&mut self, color: ThemeColor) {
        self.theme.color = color;
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme.mode = mode;
    }

    pub fn set_layout(&mut self, layout: LayoutType) {
        self.ui.layout = layout;
    }

    /// Flip between light and dark. Auto mode becomes the opposite of what the
    /// system currently shows.
    pub fn toggle_dark_mode(&mut self, system_prefers_dark: bool) {
        self.theme.mode = if self.is_dark(system_prefers_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self.theme.mode {
            ThemeMode::Auto => system_prefers_dark,
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
        }
    }

    pub fn is_auto_mode(&self) -> bool {
        self.theme.mode == ThemeMode::Auto
    }

    pub fn nav_options(&self) -> NavOptions {
        NavOptions {
            auto_expand_active: self.navigation.auto_expand_active,
            collapse_others_on_expand: self.navigation.collapse_others_on_expand,
            dense_mode: self.ui.layout == LayoutType::Dense,
        }
    }
}
