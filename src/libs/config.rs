//! Configuration management for taskman.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Both sections are optional; an absent section or an
//! absent file falls back to defaults, so the application runs without any
//! setup. Command-line flags and `TASKMAN_*` environment variables are
//! applied on top by the commands via [`ServerConfig::merge`] and
//! [`ClientConfig::merge`].
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let server = config.server_or_default();
//! println!("listening on {}", server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "taskman.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Settings of the `serve` command.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Database file. `None` means `taskman.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

/// Settings of the client commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the task server, without the `/tasks` suffix.
    pub api_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolves the database file, defaulting to the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Applies values given on the command line (or through the environment).
    pub fn merge(self, host: Option<String>, port: Option<u16>, database: Option<PathBuf>) -> Self {
        ServerConfig {
            host: host.unwrap_or(self.host),
            port: port.unwrap_or(self.port),
            database: database.or(self.database),
        }
    }
}

impl ClientConfig {
    pub fn merge(self, api_url: Option<String>) -> Self {
        ClientConfig {
            api_url: api_url.unwrap_or(self.api_url),
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn server_or_default(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn client_or_default(&self) -> ClientConfig {
        self.client.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleServer, Message::ConfigModuleClient];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| module.to_string()).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match &modules[selection] {
                Message::ConfigModuleServer => {
                    let default = config.server_or_default();
                    msg_print!(Message::ConfigModuleServer);

                    let host: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerHost.to_string())
                        .default(default.host)
                        .interact_text()?;
                    let port: u16 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerPort.to_string())
                        .default(default.port)
                        .interact_text()?;
                    let database: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerDatabase.to_string())
                        .default(default.database.map(|path| path.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.server = Some(ServerConfig {
                        host,
                        port,
                        database: (!database.is_empty()).then(|| PathBuf::from(database)),
                    });
                }
                Message::ConfigModuleClient => {
                    let default = config.client_or_default();
                    msg_print!(Message::ConfigModuleClient);

                    config.client = Some(ClientConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptClientApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
