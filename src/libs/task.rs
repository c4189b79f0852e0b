use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stored task, as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub done: bool,
}

impl Task {
    pub fn status(&self) -> &'static str {
        if self.done {
            "DONE"
        } else {
            "TO DO"
        }
    }
}

/// Payload of the create endpoint. New tasks always start as not done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

impl NewTask {
    pub fn new(title: &str, description: &str, due_date: NaiveDate) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.to_string(),
            due_date,
        }
    }
}
