#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    StandupAuthor(String),          // author handle
    PreviousWorkdayHeader(String),  // date
    TodayHeader(String),            // date
    QueryIssued(String),            // filter
    StageChanged(String),           // stage name
    TasksReceived(usize, String),   // count, filter

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    SecretsDeleted(usize), // count
    ConfigModuleRtm,
    ConfigModuleCalendar,
    ConfigModuleStandup,
    InvalidCalendarConfig(String), // error

    // === PROMPTS ===
    PromptSelectModules,
    PromptRtmApiKey,
    PromptRtmApiUrl,
    PromptRtmSharedSecret,
    PromptRtmAuthToken,
    PromptWorkingWeekdays,
    PromptHolidays,
    PromptAuthor,
    PromptGapQuery,

    // === API MESSAGES ===
    RtmNotConfigured,
    RtmRequestFailed(String),         // HTTP status
    RtmResponseInvalid(String),       // parse error
    RtmServiceError(String, String),  // code, message
}
