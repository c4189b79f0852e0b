use super::client::{self, ClientArgs};
use crate::libs::validation;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the task to mark as done
    id: String,

    #[command(flatten)]
    client: ClientArgs,
}

pub async fn cmd(args: DoneArgs) -> Result<()> {
    let id = validation::task_id(&args.id).map_err(anyhow::Error::msg)?;

    let client = args.client.client()?;
    client::complete_task(&client, id).await.map_err(|message| msg_error_anyhow!(message))
}
