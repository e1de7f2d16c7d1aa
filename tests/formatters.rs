#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use standup::libs::formatter::{format_bullet, format_date, parse_date};
    use standup::libs::messages::Message;
    use standup::libs::standup::Stage;

    #[test]
    fn test_format_date_is_day_first() {
        let date = NaiveDate::from_ymd_opt(2021, 5, 7).unwrap();
        assert_eq!(format_date(&date), "07/05/2021");
    }

    #[test]
    fn test_parse_date() {
        let date = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
        assert_eq!(parse_date("25/12/2021"), Some(date));
        assert_eq!(parse_date(" 25/12/2021 "), Some(date));
        assert_eq!(parse_date("2021-12-25"), None);
        assert_eq!(parse_date("31/02/2021"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_bullet() {
        assert_eq!(format_bullet("Ship it"), "    - Ship it");
    }

    #[test]
    fn test_report_headers() {
        assert_eq!(
            Message::PreviousWorkdayHeader("14/05/2021".to_string()).to_string(),
            "*What you did in the previous work day?* (14/05/2021)"
        );
        assert_eq!(
            Message::TodayHeader("17/05/2021".to_string()).to_string(),
            "*What you will do today?* (17/05/2021)"
        );
        assert_eq!(Message::StandupAuthor("alice".to_string()).to_string(), "Standup update from @alice:");
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::QueryingPrevious.to_string(), "querying previous work day");
        assert_eq!(Stage::Failed.to_string(), "failed");
    }
}
