use super::db::Db;
use super::error::StorageError;
use crate::libs::task::{NewTask, Task};
use rusqlite::{params, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, done) VALUES (?1, ?2, ?3, FALSE)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, done FROM tasks ORDER BY id";
const UPDATE_DONE: &str = "UPDATE tasks SET done = TRUE WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// The four task statements, bound to a storage accessor.
#[derive(Debug, Clone)]
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn insert(&self, task: &NewTask) -> Result<i64, StorageError> {
        self.db.execute_insert(INSERT_TASK, params![task.title, task.description, task.due_date])
    }

    pub fn fetch(&self) -> Result<Vec<Task>, StorageError> {
        self.db.execute_select(SELECT_TASKS, [], task_from_row)
    }

    /// Marks a task as done; returns how many rows matched (0 or 1).
    pub fn complete(&self, id: i64) -> Result<usize, StorageError> {
        self.db.execute_update(UPDATE_DONE, params![id])
    }

    pub fn delete(&self, id: i64) -> Result<usize, StorageError> {
        self.db.execute_delete(DELETE_TASK, params![id])
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        done: row.get(4)?,
    })
}
