use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// What the storage accessor was doing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateTable,
    Select,
    Insert,
    Update,
    Delete,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::CreateTable => "creating the tasks table",
            Operation::Select => "performing a select operation",
            Operation::Insert => "performing an insert operation",
            Operation::Update => "performing an update operation",
            Operation::Delete => "performing a delete operation",
        };
        write!(f, "{}", text)
    }
}

/// Failure of a single storage call.
///
/// The `Display` text is exactly what the API sends back in the `result`
/// field of a failed envelope.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("The following sqlite error occurred while {operation}: {source}")]
    Sqlite {
        operation: Operation,
        #[source]
        source: rusqlite::Error,
    },

    #[error("The following general error occurred while {operation}: {message}")]
    General { operation: Operation, message: String },
}

impl StorageError {
    pub fn sqlite(operation: Operation, source: rusqlite::Error) -> Self {
        StorageError::Sqlite { operation, source }
    }

    pub fn general(operation: Operation, error: impl Display) -> Self {
        StorageError::General {
            operation,
            message: error.to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            StorageError::Sqlite { operation, .. } | StorageError::General { operation, .. } => *operation,
        }
    }
}
