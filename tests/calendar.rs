#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Weekday};
    use standup::libs::calendar::{has_non_working_gap, weekday_from_index, CalendarError, WorkingCalendar};
    use standup::libs::config::CalendarConfig;
    use test_context::{test_context, TestContext};

    struct CalendarTestContext {
        calendar: WorkingCalendar,
    }

    impl TestContext for CalendarTestContext {
        fn setup() -> Self {
            CalendarTestContext {
                calendar: CalendarConfig::default().to_calendar().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_monday_looks_back_to_friday(ctx: &mut CalendarTestContext) {
        let window = ctx.calendar.window(date(2021, 5, 17));
        assert_eq!(window.previous_working_day, date(2021, 5, 14));
        assert!(window.has_gap);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_tuesday_looks_back_to_monday(ctx: &mut CalendarTestContext) {
        let window = ctx.calendar.window(date(2021, 5, 18));
        assert_eq!(window.previous_working_day, date(2021, 5, 17));
        assert!(!window.has_gap);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_single_holiday_is_skipped(ctx: &mut CalendarTestContext) {
        // Thursday 2021-05-13 is a holiday
        let window = ctx.calendar.window(date(2021, 5, 14));
        assert_eq!(window.previous_working_day, date(2021, 5, 12));
        assert!(window.has_gap);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_long_weekend_spans_holidays_and_weekend(ctx: &mut CalendarTestContext) {
        // Good Friday, the weekend and Easter Monday are all off
        let window = ctx.calendar.window(date(2021, 4, 6));
        assert_eq!(window.previous_working_day, date(2021, 4, 1));
        assert!(window.has_gap);
        assert_eq!((window.reference - window.previous_working_day).num_days() - 1, 4);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_non_working_reference_date(ctx: &mut CalendarTestContext) {
        let window = ctx.calendar.window(date(2021, 5, 16));
        assert_eq!(window.previous_working_day, date(2021, 5, 14));
        assert!(window.has_gap);
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_working_day_rules(ctx: &mut CalendarTestContext) {
        assert!(ctx.calendar.is_working_day(date(2021, 5, 17)));
        assert!(!ctx.calendar.is_working_day(date(2021, 5, 15)));
        assert!(!ctx.calendar.is_working_day(date(2021, 5, 16)));
        assert!(ctx.calendar.is_holiday(date(2021, 12, 25)));
        assert!(!ctx.calendar.is_working_day(date(2021, 5, 13)));
    }

    #[test_context(CalendarTestContext)]
    #[test]
    fn test_previous_working_day_over_a_year(ctx: &mut CalendarTestContext) {
        let mut day = date(2021, 1, 1);
        while day <= date(2021, 12, 31) {
            let previous = ctx.calendar.previous_working_day(day);
            assert!(previous < day, "{} is not before {}", previous, day);
            assert!(ctx.calendar.is_working_day(previous));

            let mut between = previous + Duration::days(1);
            while between < day {
                assert!(!ctx.calendar.is_working_day(between), "{} lies between {} and {}", between, previous, day);
                between = between + Duration::days(1);
            }
            day = day + Duration::days(1);
        }
    }

    #[test]
    fn test_gap_is_counted_in_calendar_days() {
        let previous = date(2021, 5, 14);
        assert!(!has_non_working_gap(previous, date(2021, 5, 15)));
        for offset in 2..6 {
            assert!(has_non_working_gap(previous, previous + Duration::days(offset)));
        }
    }

    #[test]
    fn test_single_working_weekday() {
        let calendar = WorkingCalendar::new([Weekday::Wed], Vec::<NaiveDate>::new()).unwrap();
        assert_eq!(calendar.previous_working_day(date(2021, 5, 19)), date(2021, 5, 12));
        assert!(calendar.window(date(2021, 5, 19)).has_gap);
    }

    #[test]
    fn test_weekend_only_calendar() {
        let calendar = WorkingCalendar::new([Weekday::Sat, Weekday::Sun], Vec::<NaiveDate>::new()).unwrap();
        let window = calendar.window(date(2021, 5, 16));
        assert_eq!(window.previous_working_day, date(2021, 5, 15));
        assert!(!window.has_gap);
    }

    #[test]
    fn test_empty_weekdays_fail_fast() {
        let result = WorkingCalendar::new(Vec::<Weekday>::new(), vec![date(2021, 1, 1)]);
        assert_eq!(result.unwrap_err(), CalendarError::NoWorkingWeekdays);

        let result = WorkingCalendar::from_config(&[], &[]);
        assert_eq!(result.unwrap_err(), CalendarError::NoWorkingWeekdays);
    }

    #[test]
    fn test_invalid_config_values() {
        assert_eq!(
            WorkingCalendar::from_config(&[1, 7], &[]).unwrap_err(),
            CalendarError::InvalidWeekday(7)
        );
        assert_eq!(
            WorkingCalendar::from_config(&[1], &["2021/05/01".to_string()]).unwrap_err(),
            CalendarError::InvalidHoliday("2021/05/01".to_string())
        );
    }

    #[test]
    fn test_weekday_indices_start_on_sunday() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sun);
        assert_eq!(weekday_from_index(1).unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sat);
    }
}
