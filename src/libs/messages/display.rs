//! Display implementation for taskman messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent between the interactive menu, the one-shot commands and the
//! server log.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuHeader => "Task Manager options:".to_string(),
            Message::MenuCreateTask => "Create a new task".to_string(),
            Message::MenuListTasks => "List saved tasks".to_string(),
            Message::MenuCompleteTask => "Mark a task as done".to_string(),
            Message::MenuDeleteTask => "Delete a task".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::PromptMenuOption => "Choose an option".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptTaskDueDate => "Enter task's due date".to_string(),
            Message::PromptTaskId => "Enter task ID".to_string(),
            Message::ConfirmDeleteTask(id) => format!("You're going to delete the task with ID '{}'. Are you sure of this operation?", id),

            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "Title cannot be empty.".to_string(),
            Message::InvalidDueDate => "Invalid date. Please, use ISO 8601 format (example: 2000-12-31).".to_string(),
            Message::TaskIdRequired => "An ID is necessary to perform this operation.".to_string(),
            Message::TaskIdNotInteger => "The task ID must be an integer.".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated { title, id } => format!("Task '{}' has been created with ID '{}'", title, id),
            Message::TaskCreateFailed(error) => format!("It was not possible to create the task: '{}'", error),
            Message::TaskListFailed(error) => format!("It was not possible to retrieve the task list: '{}'", error),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TaskMarkedDone(id) => format!("The task with ID '{}' has been marked as done.", id),
            Message::TaskCompleteNotFound(id) => format!(
                "It was not possible to update the task with ID '{}' because it was not found in the database.",
                id
            ),
            Message::TaskCompleteFailed(id, error) => format!("It was not possible to update the task with ID '{}': '{}'", id, error),
            Message::TaskDeleted(id) => format!("The task with ID '{}' has been deleted.", id),
            Message::TaskDeleteNotFound(id) => format!(
                "It was not possible to delete the task with ID '{}' because it was not found in the database.",
                id
            ),
            Message::TaskDeleteFailed(id, error) => format!("It was not possible to delete the task with ID '{}': '{}'", id, error),
            Message::TaskDeleteCancelled(id) => format!("The task with ID '{}' was kept.", id),

            // === CLIENT MESSAGES ===
            Message::ServerStatusError(code) => format!("An error has occurred while communicating with the server. Status code: {}", code),
            Message::ServerUnreachable(error) => format!("Could not reach the task server: {}", error),
            Message::InvalidServerResponse(error) => format!("The server sent a response that could not be read: {}", error),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Starting taskman server at http://{}", addr),
            Message::ServerStopped => "Server stopped.".to_string(),
            Message::ServerShuttingDown => "Shutting down server...".to_string(),
            Message::DatabaseReady(path) => format!("Using database {}", path),
            Message::DatabaseStartFailed(error) => format!("There was a problem creating the database: {}", error),
            Message::ServerBindFailed(addr, error) => format!("Could not listen on {}: {}", addr, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleClient => "Client settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerHost => "Host to listen on".to_string(),
            Message::PromptServerPort => "Port to listen on".to_string(),
            Message::PromptServerDatabase => "Database file (empty for default)".to_string(),
            Message::PromptClientApiUrl => "Task server URL".to_string(),
        };
        write!(f, "{}", text)
    }
}
