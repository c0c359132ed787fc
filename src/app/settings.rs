// Settings store: data type, global state and JSON persistence.
// UI state (favorite, servings) is intentionally absent; only window and
// environment preferences live here.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::localization::SupportedLang;
use crate::ui_constants::WINDOW_SIZE;

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    // UI language (None = auto/system). Stored as "en"/"id" or null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    // Simulated status bar height in physical pixels; the header stops this far from the top.
    #[serde(default)]
    pub top_inset: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: None,
            assets_dir: default_assets_dir(),
            window_size: default_window_size(),
            top_inset: 0.0,
        }
    }
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    // "auto" or any unknown code means: follow the system locale
    Ok(opt.as_deref().and_then(SupportedLang::from_code))
}

fn serialize_language_opt<S>(value: &Option<SupportedLang>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    if let Ok(p) = std::env::var("RECIPE_SETTINGS_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("recipe_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            with_settings_mut(|st| *st = s);
            log::info!("Loaded settings from {}", path.to_string_lossy());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No settings at {}; writing defaults", path.to_string_lossy());
            save_settings_to_disk();
        }
        Err(e) => {
            // Keep defaults, but leave the broken file alone for the user to fix.
            log::error!(
                "Using default settings; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = with_settings(AppSettings::clone);
    if let Err(e) = st.save_to_file(&path) {
        log::error!("Failed to save settings to {}: {}", path.to_string_lossy(), e);
    } else {
        log::info!("Saved settings to {}", path.to_string_lossy());
    }
}

/// Read settings with a closure.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap_or_else(PoisonError::into_inner);
    f(&st)
}

/// Modify settings with a closure.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut st)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_settings_path("recipe_settings_roundtrip");
        let st = AppSettings {
            language: Some(SupportedLang::Indonesian),
            assets_dir: PathBuf::from("/opt/recipes/assets"),
            window_size: [420.0, 900.0],
            top_inset: 48.0,
        };
        st.save_to_file(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"language\": \"id\""));
        assert_eq!(AppSettings::load_from_file(&path).unwrap(), st);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let st: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(st, AppSettings::default());
        assert_eq!(st.window_size, [380.0, 800.0]);
    }

    #[test]
    fn unknown_language_means_auto() {
        let st: AppSettings = serde_json::from_str(r#"{"language":"auto"}"#).unwrap();
        assert_eq!(st.language, None);
        let st: AppSettings = serde_json::from_str(r#"{"language":"en-GB"}"#).unwrap();
        assert_eq!(st.language, Some(SupportedLang::English));
    }

    #[test]
    fn malformed_file_is_invalid_data() {
        let path = temp_settings_path("recipe_settings_broken");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppSettings::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        let _ = std::fs::remove_file(path);
    }
}
