use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Multi-line block used by the interactive menu.
    pub fn task_block(task: &Task) -> String {
        format!(
            "Task {}:\n\tTitle: {}\n\tDescription: {}\n\tDue date: {}\n\tStatus: {}",
            task.id,
            task.title,
            task.description,
            task.due_date.format("%Y-%m-%d"),
            task.status()
        )
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE DATE", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.description, task.due_date.format("%Y-%m-%d"), task.status()]);
        }

        table
    }
}
