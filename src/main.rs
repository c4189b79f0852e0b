use taskman::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env feed the TASKMAN_* environment fallbacks of the CLI.
    let _ = dotenv::dotenv();

    Cli::menu().await
}
