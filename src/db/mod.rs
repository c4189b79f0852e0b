//! Database layer for taskman.
//!
//! A single SQLite table accessed through [`db::Db`], which opens a fresh
//! connection for every statement. [`tasks::Tasks`] holds the fixed SQL
//! used by the API.
//!
//! ```rust,no_run
//! use taskman::db::{db::Db, tasks::Tasks};
//! use taskman::libs::config::ServerConfig;
//! use taskman::libs::task::NewTask;
//! use chrono::NaiveDate;
//!
//! let db = Db::at(ServerConfig::default().database_path()?);
//! db.start_database()?;
//! let tasks = Tasks::new(db);
//! let id = tasks.insert(&NewTask::new("Write report", "", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()))?;
//! tasks.complete(id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handling and the generic select/insert/update/delete calls.
pub mod db;

/// Storage errors and the operation they occurred in.
pub mod error;

/// Task statements: create, list, complete, delete.
pub mod tasks;
