use super::client::{self, ClientArgs};
use super::menu::confirm_delete;
use crate::libs::validation;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    #[command(flatten)]
    client: ClientArgs,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let id = validation::task_id(&args.id).map_err(anyhow::Error::msg)?;

    if !args.yes && !confirm_delete(id)? {
        return Ok(());
    }

    let client = args.client.client()?;
    client::delete_task(&client, id).await.map_err(|message| msg_error_anyhow!(message))
}
