use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::{DAYS_PER_WEEK, DayOfWeek, DayTable};
use crate::error::ConfigError;
use crate::store::PropertyNames;

pub(crate) const DEFAULT_PREFIX: &str = "!";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Relation ids of the seven day pages, one key per day
#[derive(Debug, Default, Clone, Deserialize)]
pub(crate) struct DaysConfig {
    pub(crate) sunday: Option<String>,
    pub(crate) monday: Option<String>,
    pub(crate) tuesday: Option<String>,
    pub(crate) wednesday: Option<String>,
    pub(crate) thursday: Option<String>,
    pub(crate) friday: Option<String>,
    pub(crate) saturday: Option<String>,
}

impl DaysConfig {
    fn get(&self, day: DayOfWeek) -> Option<&String> {
        match day {
            DayOfWeek::Sunday => self.sunday.as_ref(),
            DayOfWeek::Monday => self.monday.as_ref(),
            DayOfWeek::Tuesday => self.tuesday.as_ref(),
            DayOfWeek::Wednesday => self.wednesday.as_ref(),
            DayOfWeek::Thursday => self.thursday.as_ref(),
            DayOfWeek::Friday => self.friday.as_ref(),
            DayOfWeek::Saturday => self.saturday.as_ref(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) notion_key: Option<String>,
    #[serde(default)]
    pub(crate) database_id: Option<String>,
    #[serde(default)]
    pub(crate) webhook_url: Option<String>,
    #[serde(default)]
    pub(crate) prefix: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) offline: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) properties: PropertyNames,
    #[serde(default)]
    pub(crate) days: DaysConfig,
    /// File the config was read from, if any
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    /// Config file (if any) with environment overrides applied
    pub(crate) fn load() -> Self {
        Self::load_file().with_env(|key| std::env::var(key).ok())
    }

    fn load_file() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/mealbot/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("mealbot").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("mealbot").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.mealbot.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".mealbot.toml"));
        }

        paths
    }

    /// Environment variables take precedence over file values
    pub(crate) fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_empty("NOTION_KEY") {
            self.notion_key = Some(key);
        }
        if let Some(db) = non_empty("NOTION_DB_ID") {
            self.database_id = Some(db);
        }
        if let Some(url) = non_empty("DISCORD_WEBHOOK_URL") {
            self.webhook_url = Some(url);
        }
        if let Some(tz) = non_empty("MEALBOT_TIMEZONE") {
            self.timezone = Some(tz);
        }
        self
    }

    pub(crate) fn day_table(&self) -> Result<DayTable, ConfigError> {
        let mut ids: [String; DAYS_PER_WEEK] = Default::default();
        for day in DayOfWeek::ALL {
            let id = self
                .days
                .get(day)
                .filter(|id| !id.trim().is_empty())
                .ok_or(ConfigError::MissingDay { day: day.label() })?;
            ids[day.index()] = id.trim().to_string();
        }
        DayTable::new(ids)
    }

    /// Notion token and database id, both required for online access
    pub(crate) fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        let key = self
            .notion_key
            .as_deref()
            .ok_or(ConfigError::MissingSetting {
                name: "Notion API key",
                env: "NOTION_KEY",
            })?;
        let db = self
            .database_id
            .as_deref()
            .ok_or(ConfigError::MissingSetting {
                name: "Notion database id",
                env: "NOTION_DB_ID",
            })?;
        Ok((key, db))
    }

    pub(crate) fn prefix(&self) -> Result<&str, ConfigError> {
        match self.prefix.as_deref() {
            None => Ok(DEFAULT_PREFIX),
            Some(p) if p.trim().is_empty() => Err(ConfigError::EmptyPrefix),
            Some(p) => Ok(p.trim()),
        }
    }
}
