//! Core library modules for taskman.
//!
//! Configuration and storage paths, the task model, the HTTP client used by
//! the CLI, input validation, console output and the message system.

pub mod config;
pub mod data_storage;
pub mod http;
pub mod logging;
pub mod messages;
pub mod task;
pub mod validation;
pub mod view;
