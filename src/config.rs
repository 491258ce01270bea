use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::calendar::GridOptions;
use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Initially displayed date; today when unset
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    /// "monday" or "sunday"
    pub first_weekday: String,
    pub weekend_days: Vec<Weekday>,
    /// Show the leading/trailing days of the adjacent months
    pub show_other_month_days: bool,
    pub show_week_numbers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset name
    pub theme: String,
    /// Hex colour overrides for category tags, keyed by category name
    pub tags: HashMap<String, String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            first_weekday: "monday".to_string(),
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            show_other_month_days: true,
            show_week_numbers: true,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "darkwall".to_string(),
            tags: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("best-calendar")
            .join("config.toml")
    }

    /// Date the calendar opens on
    pub fn initial_date(&self) -> Result<NaiveDate> {
        let today = Local::now().date_naive();
        let cal = &self.calendar;
        if cal.year.is_none() && cal.month.is_none() && cal.day.is_none() {
            return Ok(today);
        }

        use chrono::Datelike;
        let year = cal.year.unwrap_or(today.year());
        let month = cal.month.unwrap_or(today.month());
        let day = cal.day.unwrap_or(1);
        NaiveDate::from_ymd_opt(year, month, day)
            .with_context(|| format!("Invalid calendar start date {year}-{month}-{day}"))
    }

    pub fn grid_options(&self) -> GridOptions {
        let first_weekday = match self.calendar.first_weekday.to_lowercase().as_str() {
            "sunday" | "sun" => Weekday::Sun,
            "monday" | "mon" => Weekday::Mon,
            other => {
                tracing::warn!("Unknown first_weekday {:?}, using monday", other);
                Weekday::Mon
            }
        };

        GridOptions {
            first_weekday,
            weekend_days: self.calendar.weekend_days.clone(),
            show_other_month_days: self.calendar.show_other_month_days,
        }
    }

    /// Resolve the theme preset and apply tag colour overrides
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, using default", self.appearance.theme);
            Theme::default()
        });

        for (tag, hex) in &self.appearance.tags {
            match parse_hex_color(hex) {
                Ok(color) => theme.set_tag_color(tag, color),
                Err(e) => tracing::warn!("Ignoring colour for tag {}: {}", tag, e),
            }
        }

        theme
    }
}
