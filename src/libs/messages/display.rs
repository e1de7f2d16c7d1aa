//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match, so that wording stays
//! consistent across commands and every new variant needs an explicit string.
//!
//! ```rust
//! use standup::libs::messages::Message;
//!
//! let header = Message::TodayHeader("17/05/2021".to_string());
//! assert_eq!(header.to_string(), "*What you will do today?* (17/05/2021)");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::StandupAuthor(author) => format!("Standup update from @{}:", author),
            Message::PreviousWorkdayHeader(date) => format!("*What you did in the previous work day?* ({})", date),
            Message::TodayHeader(date) => format!("*What you will do today?* ({})", date),
            Message::QueryIssued(filter) => format!("Querying tasks with filter: {}", filter),
            Message::StageChanged(stage) => format!("Standup stage: {}", stage),
            Message::TasksReceived(count, filter) => format!("Received {} task(s) for filter: {}", count, filter),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNothingToDelete => "No configuration found, nothing to delete".to_string(),
            Message::SecretsDeleted(count) => format!("Deleted {} stored credential(s)", count),
            Message::ConfigModuleRtm => "Remember The Milk settings".to_string(),
            Message::ConfigModuleCalendar => "Working calendar settings".to_string(),
            Message::ConfigModuleStandup => "Standup report settings".to_string(),
            Message::InvalidCalendarConfig(error) => format!("Invalid working calendar configuration: {}", error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptRtmApiKey => "Enter your Remember The Milk API key".to_string(),
            Message::PromptRtmApiUrl => "Enter the Remember The Milk REST API URL".to_string(),
            Message::PromptRtmSharedSecret => "Enter your Remember The Milk shared secret".to_string(),
            Message::PromptRtmAuthToken => "Enter your Remember The Milk auth token".to_string(),
            Message::PromptWorkingWeekdays => "Enter working weekdays (0 = Sunday .. 6 = Saturday, comma separated)".to_string(),
            Message::PromptHolidays => "Enter holidays (YYYY-MM-DD, comma separated)".to_string(),
            Message::PromptAuthor => "Enter the name shown in the report header (empty to omit)".to_string(),
            Message::PromptGapQuery => "Select how tasks completed over weekends and holidays are queried".to_string(),

            // === API MESSAGES ===
            Message::RtmNotConfigured => "Remember The Milk is not configured. Run `standup init` first.".to_string(),
            Message::RtmRequestFailed(status) => format!("Remember The Milk request failed with status {}", status),
            Message::RtmResponseInvalid(error) => format!("Unexpected Remember The Milk response: {}", error),
            Message::RtmServiceError(code, msg) => format!("{} (code {})", msg, code),
        };
        write!(f, "{}", text)
    }
}
