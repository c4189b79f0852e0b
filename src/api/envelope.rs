use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Either the value of a successful call or the error text of a failed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Value(T),
    Error(String),
}

/// JSON body of every API response: `{"success": bool, "result": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub result: Outcome<T>,
}

impl<T> Envelope<T> {
    pub fn ok(value: T) -> Self {
        Envelope {
            success: true,
            result: Outcome::Value(value),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            result: Outcome::Error(message.into()),
        }
    }

    /// Unwraps the envelope; the `success` flag decides which side is trusted.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.result) {
            (true, Outcome::Value(value)) => Ok(value),
            (_, Outcome::Error(message)) => Err(message),
            (false, Outcome::Value(_)) => Err(String::from("request failed without an error message")),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Envelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Envelope::ok(value),
            Err(error) => Envelope::err(error.to_string()),
        }
    }
}
