//! Interactive task menu.
//!
//! Loops over the five menu options until the user picks "Exit". Every
//! prompt re-asks until its input passes the matching check in
//! [`validation`], then the request is sent and its outcome printed.

use super::client::{self, ClientArgs, ListStyle};
use crate::libs::messages::Message;
use crate::libs::task::NewTask;
use crate::libs::validation;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateTask,
    ListTasks,
    CompleteTask,
    DeleteTask,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::CreateTask,
        MenuOption::ListTasks,
        MenuOption::CompleteTask,
        MenuOption::DeleteTask,
        MenuOption::Exit,
    ];

    pub fn label(&self) -> Message {
        match self {
            MenuOption::CreateTask => Message::MenuCreateTask,
            MenuOption::ListTasks => Message::MenuListTasks,
            MenuOption::CompleteTask => Message::MenuCompleteTask,
            MenuOption::DeleteTask => Message::MenuDeleteTask,
            MenuOption::Exit => Message::MenuExit,
        }
    }
}

pub async fn cmd(args: ClientArgs) -> Result<()> {
    let client = args.client()?;

    loop {
        msg_print!(Message::MenuHeader);
        match choose_option()? {
            MenuOption::CreateTask => {
                let task = prompt_new_task()?;
                report(client::create_task(&client, &task).await);
            }
            MenuOption::ListTasks => report(client::list_tasks(&client, ListStyle::Blocks).await),
            MenuOption::CompleteTask => {
                let id = prompt_task_id()?;
                report(client::complete_task(&client, id).await);
            }
            MenuOption::DeleteTask => {
                let id = prompt_task_id()?;
                if confirm_delete(id)? {
                    report(client::delete_task(&client, id).await);
                }
            }
            MenuOption::Exit => return Ok(()),
        }
    }
}

fn choose_option() -> Result<MenuOption> {
    let labels: Vec<String> = MenuOption::ALL.iter().map(|option| option.label().to_string()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMenuOption.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MenuOption::ALL[selection])
}

fn prompt_new_task() -> Result<NewTask> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| validation::title(input).map(|_| ()))
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| validation::due_date(input).map(|_| ()))
        .interact_text()?;
    let due_date: NaiveDate = validation::due_date(&due_date).map_err(anyhow::Error::msg)?;

    Ok(NewTask::new(&title, &description, due_date))
}

fn prompt_task_id() -> Result<i64> {
    let id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskId.to_string())
        .allow_empty(true)
        .validate_with(|input: &String| validation::task_id(input).map(|_| ()))
        .interact_text()?;
    validation::task_id(&id).map_err(anyhow::Error::msg)
}

/// Asks whether task `id` should really be deleted.
pub fn confirm_delete(id: i64) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(id).to_string())
        .interact()?;

    if !confirmed {
        msg_warning!(Message::TaskDeleteCancelled(id));
    }
    Ok(confirmed)
}

/// Failures are shown and the menu keeps running.
fn report(result: std::result::Result<(), Message>) {
    if let Err(message) = result {
        msg_error!(message);
    }
}
