//! Format checks applied to user input before anything is sent to the server.
//!
//! Each validator returns the parsed value or the [`Message`] explaining the
//! problem, so the same functions back both the interactive prompts and the
//! one-shot command arguments.

use crate::libs::messages::Message;
use chrono::NaiveDate;

/// Date format accepted for due dates (ISO 8601 calendar date).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn title(input: &str) -> Result<String, Message> {
    if input.is_empty() {
        return Err(Message::TitleRequired);
    }
    Ok(input.to_string())
}

pub fn due_date(input: &str) -> Result<NaiveDate, Message> {
    NaiveDate::parse_from_str(input, DUE_DATE_FORMAT).map_err(|_| Message::InvalidDueDate)
}

/// Task ids must be written as plain digits: no sign, no spaces.
pub fn task_id(input: &str) -> Result<i64, Message> {
    if input.is_empty() {
        return Err(Message::TaskIdRequired);
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(Message::TaskIdNotInteger);
    }
    input.parse::<i64>().map_err(|_| Message::TaskIdNotInteger)
}
