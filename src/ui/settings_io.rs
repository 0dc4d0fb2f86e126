use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dreamwalker");
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_settings_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    if let Err(e) = save_settings_to(settings, &settings_path()) {
        tracing::warn!("could not save UI settings: {e}");
    }
}

/// Missing or unreadable files give the defaults.
pub fn load_settings_from(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<UiSettings>(&s).ok())
        .map(UiSettings::clamped)
        .unwrap_or_default()
}

pub fn save_settings_to(settings: &UiSettings, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    tracing::debug!("saved UI settings to {}", path.display());
    Ok(())
}
