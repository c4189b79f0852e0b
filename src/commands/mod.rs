pub mod add;
pub mod client;
pub mod delete;
pub mod done;
pub mod init;
pub mod list;
pub mod menu;
pub mod serve;

use crate::libs::logging;
use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the task API server")]
    Serve(serve::ServeArgs),
    #[command(about = "Open the interactive task menu")]
    Menu(client::ClientArgs),
    #[command(about = "List saved tasks")]
    List(client::ClientArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        match &cli.command {
            Commands::Serve(_) => logging::init("taskman=info,tower_http=info"),
            _ if is_debug_mode() => logging::init("taskman=debug"),
            _ => {}
        }

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Menu(args) => menu::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}
