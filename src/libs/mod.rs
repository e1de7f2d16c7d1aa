//! Core library modules for the standup application.
//!
//! - **calendar**: working days, holidays and the previous-work-day window
//! - **standup**: query construction, deduplication and report assembly
//! - **config** / **data_storage** / **secret**: settings and stored credentials
//! - **messages**: user-facing text and printing macros
//! - **formatter** / **view**: date formatting and Markdown output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use standup::libs::config::Config;
//! use standup::libs::standup::Standup;
//!
//! let config = Config::read()?;
//! let standup = Standup::new(config.working_calendar()?).filter("list:Work");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod secret;
pub mod standup;
pub mod task;
pub mod view;
