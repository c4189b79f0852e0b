use super::client::{self, ClientArgs};
use crate::libs::task::NewTask;
use crate::libs::validation;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(short, long)]
    title: String,

    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Due date in ISO 8601 format (YYYY-MM-DD)
    #[arg(long)]
    due_date: String,

    #[command(flatten)]
    client: ClientArgs,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let title = validation::title(&args.title).map_err(anyhow::Error::msg)?;
    let due_date = validation::due_date(&args.due_date).map_err(anyhow::Error::msg)?;

    let client = args.client.client()?;
    client::create_task(&client, &NewTask::new(&title, &args.description, due_date))
        .await
        .map_err(|message| msg_error_anyhow!(message))
}
