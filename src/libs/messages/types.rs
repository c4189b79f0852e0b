/// Every user-facing message the application prints.
///
/// Text lives in `display.rs`; callers only pick the variant and its data.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuHeader,
    MenuCreateTask,
    MenuListTasks,
    MenuCompleteTask,
    MenuDeleteTask,
    MenuExit,
    PromptMenuOption,

    // === TASK PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskId,
    ConfirmDeleteTask(i64),

    // === VALIDATION MESSAGES ===
    TitleRequired,
    InvalidDueDate,
    TaskIdRequired,
    TaskIdNotInteger,

    // === TASK MESSAGES ===
    TaskCreated { title: String, id: i64 },
    TaskCreateFailed(String),
    TaskListFailed(String),
    TasksHeader,
    NoTasksFound,
    TaskMarkedDone(i64),
    TaskCompleteNotFound(i64),
    TaskCompleteFailed(i64, String),
    TaskDeleted(i64),
    TaskDeleteNotFound(i64),
    TaskDeleteFailed(i64, String),
    TaskDeleteCancelled(i64),

    // === CLIENT MESSAGES ===
    ServerStatusError(u16),
    ServerUnreachable(String),
    InvalidServerResponse(String),

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerStopped,
    ServerShuttingDown,
    DatabaseReady(String),
    DatabaseStartFailed(String),
    ServerBindFailed(String, String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleServer,
    ConfigModuleClient,
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptServerDatabase,
    PromptClientApiUrl,
}
