//! Standup report assembly.
//!
//! A report is built from three task queries issued strictly in order:
//!
//! 1. tasks completed on the previous working day,
//! 2. tasks completed today,
//! 3. tasks due today.
//!
//! Each section is written as soon as its query returns, so a failing query
//! leaves the sections already printed in place and stops everything after
//! it. Due tasks that were also completed today are listed only once.
//!
//! When weekends or holidays separate the previous working day from the
//! reference date, the first query is widened to a `completedBefore` /
//! `completedAfter` range (see [`GapQueryStyle`]) so work finished on the
//! days off is reported too.

use super::calendar::{StandupWindow, WorkingCalendar};
use super::formatter::{format_date, parse_date};
use super::messages::Message;
use super::task::{QueryKind, TaskNames};
use super::view::View;
use crate::api::TaskService;
use crate::msg_debug;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandupError {
    #[error("Could not get tasks for {date} ({message})")]
    QueryFailed { stage: Stage, date: String, message: String },
    #[error("Could not write the report: {0}")]
    Output(#[from] io::Error),
}

/// Progress of a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    QueryingPrevious,
    QueryingToday,
    QueryingDue,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::QueryingPrevious => "querying previous work day",
            Stage::QueryingToday => "querying today",
            Stage::QueryingDue => "querying due today",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// How the previous-day query is widened across non-working days.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GapQueryStyle {
    /// `completedBefore:<today> completedAfter:<previous work day>`.
    #[default]
    Span,
    /// Like `Span`, but `completedAfter` is the day before the previous work
    /// day so that day's own completions are included.
    Inclusive,
}

impl GapQueryStyle {
    pub fn description(&self) -> &'static str {
        match self {
            GapQueryStyle::Span => "span: completed after the previous work day and before today",
            GapQueryStyle::Inclusive => "inclusive: also include tasks completed on the previous work day",
        }
    }
}

/// The task names collected for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandupReport {
    pub window: StandupWindow,
    pub previous: Vec<String>,
    pub today: Vec<String>,
    /// Due today and not already completed today.
    pub due: Vec<String>,
}

/// `"<filter> <kind>:<DD/MM/YYYY>"`.
pub fn task_query(filter: &str, kind: QueryKind, date: &NaiveDate) -> String {
    format!("{} {}:{}", filter, kind.as_str(), format_date(date))
}

/// Query for the "previous work day" section.
pub fn previous_completed_query(filter: &str, window: &StandupWindow, style: GapQueryStyle) -> String {
    if !window.has_gap {
        return task_query(filter, QueryKind::Completed, &window.previous_working_day);
    }
    let after = match style {
        GapQueryStyle::Span => window.previous_working_day,
        GapQueryStyle::Inclusive => window.previous_working_day - Duration::days(1),
    };
    format!(
        "{} completedBefore:{} completedAfter:{}",
        filter,
        format_date(&window.reference),
        format_date(&after)
    )
}

/// Due tasks whose names are absent from `completed`, keeping `due` order.
pub fn distinct_due(due: &[String], completed: &[String]) -> Vec<String> {
    let completed: HashSet<&str> = completed.iter().map(String::as_str).collect();
    due.iter().filter(|name| !completed.contains(name.as_str())).cloned().collect()
}

/// Resolves the report date: `raw` as `DD/MM/YYYY` when given, `today` otherwise.
///
/// An unparsable date is reported like a failed query for that date.
pub fn reference_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, StandupError> {
    match raw {
        None => Ok(today),
        Some(value) => parse_date(value).ok_or_else(|| StandupError::QueryFailed {
            stage: Stage::QueryingPrevious,
            date: value.to_string(),
            message: "invalid date, expected DD/MM/YYYY".to_string(),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct Standup {
    calendar: WorkingCalendar,
    filter: String,
    gap_query: GapQueryStyle,
    author: Option<String>,
}

impl Standup {
    pub fn new(calendar: WorkingCalendar) -> Self {
        Self {
            calendar,
            filter: String::new(),
            gap_query: GapQueryStyle::default(),
            author: None,
        }
    }

    /// Caller filter prepended to every query, e.g. `list:Work`.
    pub fn filter(self, filter: &str) -> Self {
        Self {
            filter: filter.to_string(),
            ..self
        }
    }

    pub fn gap_query(self, gap_query: GapQueryStyle) -> Self {
        Self { gap_query, ..self }
    }

    pub fn author(self, author: Option<String>) -> Self {
        Self { author, ..self }
    }

    /// Runs the three queries against `service` and writes the report to `out`.
    pub async fn run<S, W>(&self, service: &mut S, reference: NaiveDate, out: &mut W) -> Result<StandupReport, StandupError>
    where
        S: TaskService,
        W: Write,
    {
        let window = self.calendar.window(reference);

        if let Some(author) = &self.author {
            writeln!(out, "{}\n", Message::StandupAuthor(author.clone()))?;
        }

        let previous_filter = previous_completed_query(&self.filter, &window, self.gap_query);
        let previous = query(service, Stage::QueryingPrevious, &previous_filter, &window.previous_working_day).await?;
        writeln!(out, "{}", Message::PreviousWorkdayHeader(format_date(&window.previous_working_day)))?;
        View::tasks(out, &previous)?;
        writeln!(out)?;

        let today_filter = task_query(&self.filter, QueryKind::Completed, &reference);
        let today = query(service, Stage::QueryingToday, &today_filter, &reference).await?;
        writeln!(out, "{}", Message::TodayHeader(format_date(&reference)))?;
        View::tasks(out, &today)?;

        let due_filter = task_query(&self.filter, QueryKind::Due, &reference);
        let due = distinct_due(&query(service, Stage::QueryingDue, &due_filter, &reference).await?, &today);
        View::tasks(out, &due)?;
        out.flush()?;

        msg_debug!(Message::StageChanged(Stage::Done.to_string()));
        Ok(StandupReport {
            window,
            previous,
            today,
            due,
        })
    }
}

async fn query<S: TaskService>(service: &mut S, stage: Stage, filter: &str, date: &NaiveDate) -> Result<Vec<String>, StandupError> {
    msg_debug!(Message::StageChanged(stage.to_string()));
    msg_debug!(Message::QueryIssued(filter.to_string()));

    match service.query_tasks(filter).await {
        Ok(tasks) => Ok(tasks.names()),
        Err(e) => {
            msg_debug!(Message::StageChanged(Stage::Failed.to_string()));
            Err(StandupError::QueryFailed {
                stage,
                date: format_date(date),
                message: e.to_string(),
            })
        }
    }
}
