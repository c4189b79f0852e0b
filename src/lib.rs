//! # Taskman
//!
//! A small task tracker made of two halves sharing one binary:
//!
//! - **API server** (`taskman serve`): four REST routes over a single SQLite table
//! - **Interactive client** (`taskman menu`): a terminal menu driving the API over HTTP
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
