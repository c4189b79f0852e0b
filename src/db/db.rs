use super::error::{Operation, StorageError};
use rusqlite::{Connection, Params, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    description TEXT,
    due_date DATE,
    done BOOLEAN
);";

/// Storage accessor for one SQLite file.
///
/// Holds only the path: each call opens its own connection, runs a single
/// statement, commits when the statement writes, and closes the connection
/// when it goes out of scope.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn at(path: impl AsRef<Path>) -> Db {
        Db {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self, operation: Operation) -> Result<Connection, StorageError> {
        debug!(path = %self.path.display(), %operation, "opening database connection");
        Connection::open(&self.path).map_err(|source| StorageError::sqlite(operation, source))
    }

    /// Creates the tasks table if it does not exist yet.
    pub fn start_database(&self) -> Result<(), StorageError> {
        let operation = Operation::CreateTable;
        let conn = self.connect(operation)?;
        conn.execute(SCHEMA_TASKS, []).map_err(|source| StorageError::sqlite(operation, source))?;
        Ok(())
    }

    pub fn execute_select<T, P, F>(&self, query: &str, params: P, map: F) -> Result<Vec<T>, StorageError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let operation = Operation::Select;
        let conn = self.connect(operation)?;
        select_rows(&conn, query, params, map).map_err(|source| StorageError::sqlite(operation, source))
    }

    /// Runs an INSERT and returns the id of the inserted row.
    pub fn execute_insert<P: Params>(&self, query: &str, params: P) -> Result<i64, StorageError> {
        let (_, last_id) = self.execute_write(Operation::Insert, query, params)?;
        Ok(last_id)
    }

    /// Runs an UPDATE and returns the number of modified rows.
    pub fn execute_update<P: Params>(&self, query: &str, params: P) -> Result<usize, StorageError> {
        let (changed, _) = self.execute_write(Operation::Update, query, params)?;
        Ok(changed)
    }

    /// Runs a DELETE and returns the number of removed rows.
    pub fn execute_delete<P: Params>(&self, query: &str, params: P) -> Result<usize, StorageError> {
        let (changed, _) = self.execute_write(Operation::Delete, query, params)?;
        Ok(changed)
    }

    fn execute_write<P: Params>(&self, operation: Operation, query: &str, params: P) -> Result<(usize, i64), StorageError> {
        let mut conn = self.connect(operation)?;
        write_committed(&mut conn, query, params).map_err(|source| StorageError::sqlite(operation, source))
    }
}

fn select_rows<T, P, F>(conn: &Connection, query: &str, params: P, map: F) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(query)?;
    let rows = stmt.query_map(params, map)?.collect::<rusqlite::Result<Vec<T>>>();
    rows
}

fn write_committed<P: Params>(conn: &mut Connection, query: &str, params: P) -> rusqlite::Result<(usize, i64)> {
    let tx = conn.transaction()?;
    let changed = tx.execute(query, params)?;
    let last_id = tx.last_insert_rowid();
    tx.commit()?;
    Ok((changed, last_id))
}
