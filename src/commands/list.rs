use super::client::{self, ClientArgs, ListStyle};
use crate::msg_error_anyhow;
use anyhow::Result;

pub async fn cmd(args: ClientArgs) -> Result<()> {
    let client = args.client()?;
    client::list_tasks(&client, ListStyle::Table)
        .await
        .map_err(|message| msg_error_anyhow!(message))
}
