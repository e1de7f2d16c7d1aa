//! # Standup - daily standup reports from Remember The Milk
//!
//! Collects what was completed on the previous working day, what is completed
//! or due today, and prints it as a Markdown bullet report ready to paste
//! into a team chat.
//!
//! ## Features
//!
//! - **Business-day aware**: skips weekends and configured holidays when
//!   looking back, and widens the query to cover the days off
//! - **Deduplicated**: tasks completed today are not repeated as still due
//! - **Filterable**: any Remember The Milk filter can narrow the report
//!
//! ## Usage
//!
//! ```rust,no_run
//! use standup::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
