use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::core::PersistenceError;

const APP_NAME: &str = "kelime";
pub const SETTINGS_FILE: &str = "settings.json";

/// User preferences that survive restarts. Word statuses are never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { dark_mode: true, zoom: 1.2 }
    }
}

impl Settings {
    pub fn load() -> Self {
        load_json_or_default(&get_app_data_dir(), SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = save_json(&get_app_data_dir(), self, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }
}

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(dir: &Path, data: &T, filename: &str) -> Result<(), PersistenceError> {
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    debug!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    dir: &Path,
    filename: &str,
) -> Result<T, PersistenceError> {
    let file_path = dir.join(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(dir: &Path, filename: &str) -> T {
    match load_json::<T>(dir, filename) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings: Settings = load_json(dir.path(), SETTINGS_FILE).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_survive_a_save() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings { dark_mode: false, zoom: 1.5 };

        save_json(dir.path(), &settings, SETTINGS_FILE).unwrap();

        let loaded: Settings = load_json(dir.path(), SETTINGS_FILE).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{ "dark_mode": false }"#).unwrap();

        let loaded: Settings = load_json(dir.path(), SETTINGS_FILE).unwrap();
        assert!(!loaded.dark_mode);
        assert_eq!(loaded.zoom, Settings::default().zoom);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();

        assert!(load_json::<Settings>(dir.path(), SETTINGS_FILE).is_err());
        let settings: Settings = load_json_or_default(dir.path(), SETTINGS_FILE);
        assert_eq!(settings, Settings::default());
    }
}
