//! Configuration management for the standup application.
//!
//! The configuration is a JSON file in the platform data directory (see
//! [`DataStorage`]). Every module is optional; missing modules fall back to
//! defaults, so a report can be produced with nothing but RTM credentials.
//!
//! ## Modules
//!
//! - **rtm**: Remember The Milk API key and endpoint
//! - **calendar**: working weekdays and holidays used to find the previous work day
//! - **standup**: report author and the query used across weekends and holidays
//!
//! Credentials (shared secret, auth token) are never written here; they live
//! in encrypted secret files managed by [`crate::libs::secret::Secret`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use standup::libs::config::Config;
//!
//! let config = Config::read()?;
//! let calendar = config.working_calendar()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::calendar::{CalendarError, WorkingCalendar};
use super::data_storage::DataStorage;
use super::standup::GapQueryStyle;
use crate::api::rtm::RtmConfig;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Holidays observed when no calendar is configured.
pub const DEFAULT_HOLIDAYS: [&str; 10] = [
    "2021-03-08",
    "2021-04-02",
    "2021-04-04",
    "2021-04-05",
    "2021-05-01",
    "2021-05-13",
    "2021-05-24",
    "2021-10-03",
    "2021-12-25",
    "2021-12-26",
];

/// Monday to Friday, counted from Sunday = 0.
pub const DEFAULT_WORKING_WEEKDAYS: [u32; 5] = [1, 2, 3, 4, 5];

/// A module offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Working calendar settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// Weekday indices considered working days, 0 = Sunday .. 6 = Saturday.
    pub working_weekdays: Vec<u32>,
    /// Holiday dates formatted `YYYY-MM-DD`.
    pub holidays: Vec<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            working_weekdays: DEFAULT_WORKING_WEEKDAYS.to_vec(),
            holidays: DEFAULT_HOLIDAYS.iter().map(|date| date.to_string()).collect(),
        }
    }
}

impl CalendarConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "calendar".to_string(),
            name: "Calendar".to_string(),
        }
    }

    pub fn to_calendar(&self) -> Result<WorkingCalendar, CalendarError> {
        WorkingCalendar::from_config(&self.working_weekdays, &self.holidays)
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleCalendar);

        let weekdays: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkingWeekdays.to_string())
            .default(join(&default.working_weekdays))
            .interact_text()?;
        let holidays: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHolidays.to_string())
            .default(default.holidays.join(", "))
            .allow_empty(true)
            .interact_text()?;

        let mut working_weekdays = Vec::new();
        for item in split_list(&weekdays) {
            match item.parse::<u32>() {
                Ok(index) => working_weekdays.push(index),
                Err(_) => msg_bail_anyhow!(Message::InvalidCalendarConfig(format!("'{}' is not a weekday index", item))),
            }
        }

        let calendar = CalendarConfig {
            working_weekdays,
            holidays: split_list(&holidays),
        };
        if let Err(e) = calendar.to_calendar() {
            msg_bail_anyhow!(Message::InvalidCalendarConfig(e.to_string()));
        }
        Ok(calendar)
    }
}

/// Report presentation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StandupConfig {
    /// Handle printed in the "Standup update from @..." line; omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub gap_query: GapQueryStyle,
}

impl StandupConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "standup".to_string(),
            name: "Standup".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleStandup);

        let author: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAuthor.to_string())
            .default(default.author.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let styles = [GapQueryStyle::Span, GapQueryStyle::Inclusive];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptGapQuery.to_string())
            .items(&styles.iter().map(|style| style.description()).collect::<Vec<_>>())
            .default(styles.iter().position(|style| *style == default.gap_query).unwrap_or(0))
            .interact()?;

        let author = author.trim().trim_start_matches('@').to_string();
        Ok(StandupConfig {
            author: if author.is_empty() { None } else { Some(author) },
            gap_query: styles[selected],
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtm: Option<RtmConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standup: Option<StandupConfig>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        DataStorage::new().remove(CONFIG_FILE_NAME)
    }

    /// The configured working calendar, or the default one.
    pub fn working_calendar(&self) -> Result<WorkingCalendar, CalendarError> {
        self.calendar.clone().unwrap_or_default().to_calendar()
    }

    pub fn standup(&self) -> StandupConfig {
        self.standup.clone().unwrap_or_default()
    }

    /// Runs the interactive setup, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [RtmConfig::module(), CalendarConfig::module(), StandupConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "rtm" => config.rtm = Some(RtmConfig::init(&config.rtm)?),
                "calendar" => config.calendar = Some(CalendarConfig::init(&config.calendar)?),
                "standup" => config.standup = Some(StandupConfig::init(&config.standup)?),
                _ => {}
            }
        }

        Ok(config)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}

fn join(values: &[u32]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", ")
}
