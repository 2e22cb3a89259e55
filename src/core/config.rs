use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Alert feed settings, persisted in settings.json by the desktop shell.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// How many trailing days of activity feed follow-up suggestions.
    #[serde(default = "default_follow_up_window_days")]
    pub follow_up_window_days: i64,
}

fn default_follow_up_window_days() -> i64 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            follow_up_window_days: default_follow_up_window_days(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Load settings, falling back to defaults on any read or parse failure.
    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
