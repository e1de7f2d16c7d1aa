/// A task as returned by the task service.
///
/// Only `name` is used when building a report; the remaining fields are kept
/// for debugging output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<String>,
    pub name: String,
    pub due: Option<String>,
    pub completed: Option<String>,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            due: None,
            completed: None,
        }
    }
}

/// Extracts task names, keeping the service order.
pub trait TaskNames {
    fn names(&self) -> Vec<String>;
}

impl TaskNames for Vec<Task> {
    fn names(&self) -> Vec<String> {
        self.iter().map(|task| task.name.clone()).collect()
    }
}

/// The kind of date constraint appended to a caller filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Completed,
    Due,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Completed => "completed",
            QueryKind::Due => "due",
        }
    }
}
