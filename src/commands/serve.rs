use crate::api;
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TASKMAN_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "TASKMAN_PORT")]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long, env = "TASKMAN_DATABASE")]
    database: Option<PathBuf>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?.server_or_default().merge(args.host, args.port, args.database);
    let tasks = Tasks::new(Db::at(config.database_path()?));

    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| msg_error_anyhow!(Message::ServerBindFailed(addr.clone(), e.to_string())))?;

    msg_info!(Message::ServerStarting(addr));
    api::serve(listener, tasks, shutdown_signal()).await?;
    msg_info!(Message::ServerStopped);

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    msg_info!(Message::ServerShuttingDown);
}
