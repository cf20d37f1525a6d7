use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub channels: ChannelsConfig,
    pub schedule: ScheduleConfig,
    pub poll: PollConfig,
    /// Override for the settings-file location. Defaults to
    /// `~/.gymbot/settings.json`.
    #[serde(rename = "settingsPath")]
    pub settings_path: Option<PathBuf>,
}

impl Config {
    pub fn settings_file(&self) -> PathBuf {
        self.settings_path.clone().unwrap_or_else(|| {
            crate::utils::gymbot_home()
                .map(|home| home.join("settings.json"))
                .unwrap_or_else(|_| PathBuf::from("gym_settings.json"))
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    pub pushbullet: PushbulletConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PushbulletConfig {
    /// Access tokens; the first non-empty entry is used.
    #[serde(default, rename = "apiKeys")]
    pub api_keys: Vec<String>,
    #[serde(default = "default_base_url", rename = "baseUrl")]
    pub base_url: String,
}

impl PushbulletConfig {
    pub fn api_key(&self) -> Option<&str> {
        self.api_keys
            .iter()
            .map(String::as_str)
            .find(|key| !key.is_empty())
    }
}

impl Default for PushbulletConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            base_url: default_base_url(),
        }
    }
}

// Keep tokens out of debug/log output.
impl fmt::Debug for PushbulletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushbulletConfig")
            .field("api_keys", &format!("<{} redacted>", self.api_keys.len()))
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.pushbullet.com/v2".to_string()
}

/// Day-plan configuration. Explicit 7-entry tables (null = rest day) win
/// over the named preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Which built-in 4-day table to use: "split" (Mon/Tue/Thu/Sat) or
    /// "rotation" (Mon–Thu).
    #[serde(default = "default_four_day_preset", rename = "fourDayPreset")]
    pub four_day_preset: String,
    #[serde(default, rename = "fourDay")]
    pub four_day: Option<Vec<Option<String>>>,
    #[serde(default, rename = "sixDay")]
    pub six_day: Option<Vec<Option<String>>>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            four_day_preset: default_four_day_preset(),
            four_day: None,
            six_day: None,
        }
    }
}

fn default_four_day_preset() -> String {
    "split".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_interval_seconds", rename = "intervalSeconds")]
    pub interval_seconds: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
        }
    }
}

fn default_interval_seconds() -> u64 {
    5
}
