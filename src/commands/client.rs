//! Pieces shared by every command that talks to the task server.
//!
//! The interactive menu and the one-shot commands issue the same four calls
//! and report their outcome with the same messages; both live here.

use crate::libs::config::Config;
use crate::libs::http::{ClientError, TaskClient};
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task};
use crate::libs::view::View;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Base URL of the task server (defaults to the configured one)
    #[arg(long, env = "TASKMAN_API_URL")]
    url: Option<String>,
}

impl ClientArgs {
    pub fn client(&self) -> Result<TaskClient> {
        let config = Config::read()?.client_or_default().merge(self.url.clone());
        Ok(TaskClient::new(&config.api_url))
    }
}

/// How a task list is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Blocks,
    Table,
}

/// Creates a task and prints its id.
///
/// Like the other calls below, a failure is returned as the message to show
/// instead of being printed, so the caller decides whether it ends the run.
pub async fn create_task(client: &TaskClient, task: &NewTask) -> Result<(), Message> {
    let id = client.create_task(task).await.map_err(|e| failure_message(e, Message::TaskCreateFailed))?;
    msg_success!(Message::TaskCreated {
        title: task.title.clone(),
        id
    });
    Ok(())
}

pub async fn list_tasks(client: &TaskClient, style: ListStyle) -> Result<(), Message> {
    let tasks = client.list_tasks().await.map_err(|e| failure_message(e, Message::TaskListFailed))?;
    if tasks.is_empty() {
        msg_print!(Message::NoTasksFound);
    } else {
        print_tasks(&tasks, style);
    }
    Ok(())
}

pub async fn complete_task(client: &TaskClient, id: i64) -> Result<(), Message> {
    match client.complete_task(id).await {
        Ok(0) => Err(Message::TaskCompleteNotFound(id)),
        Ok(_) => {
            msg_success!(Message::TaskMarkedDone(id));
            Ok(())
        }
        Err(e) => Err(failure_message(e, |error| Message::TaskCompleteFailed(id, error))),
    }
}

pub async fn delete_task(client: &TaskClient, id: i64) -> Result<(), Message> {
    match client.delete_task(id).await {
        Ok(0) => Err(Message::TaskDeleteNotFound(id)),
        Ok(_) => {
            msg_success!(Message::TaskDeleted(id));
            Ok(())
        }
        Err(e) => Err(failure_message(e, |error| Message::TaskDeleteFailed(id, error))),
    }
}

fn print_tasks(tasks: &[Task], style: ListStyle) {
    match style {
        ListStyle::Blocks => {
            for task in tasks {
                msg_print!(View::task_block(task));
            }
        }
        ListStyle::Table => {
            msg_print!(Message::TasksHeader);
            View::tasks_table(tasks).printstd();
        }
    }
}

/// Maps a client failure to the message shown to the user.
///
/// `rejected` builds the message for errors reported by the server itself.
pub fn failure_message(error: ClientError, rejected: impl FnOnce(String) -> Message) -> Message {
    match error {
        ClientError::Rejected(reason) => rejected(reason),
        ClientError::UnexpectedStatus(status) => Message::ServerStatusError(status.as_u16()),
        ClientError::Transport(e) => Message::ServerUnreachable(e.to_string()),
        ClientError::InvalidBody(e) => Message::InvalidServerResponse(e.to_string()),
    }
}
