//! Task-service clients.
//!
//! The report only needs one capability from a task service: run a filter
//! expression and return the matching tasks in service order. That contract
//! is [`TaskService`]; [`rtm::Rtm`] implements it for Remember The Milk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use standup::api::{rtm::Rtm, TaskService};
//! use standup::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let mut rtm = Rtm::new(config.rtm.as_ref().unwrap());
//! let tasks = rtm.query_tasks("list:Work completed:14/05/2021").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::Task;
use anyhow::Result;

pub mod rtm;

pub use rtm::RtmConfig;

/// A source of tasks that understands filter expressions.
#[allow(async_fn_in_trait)]
pub trait TaskService {
    /// Runs `filter` against the service.
    ///
    /// Authentication, transport and response decoding all happen behind
    /// this call; any failure is returned as an error and never retried.
    async fn query_tasks(&mut self, filter: &str) -> Result<Vec<Task>>;
}
