//! REST API over the tasks table.
//!
//! | Method   | Path          | Result on success        |
//! |----------|---------------|--------------------------|
//! | `POST`   | `/tasks`      | id of the new task       |
//! | `GET`    | `/tasks`      | list of tasks            |
//! | `PUT`    | `/tasks/{id}` | number of updated rows   |
//! | `DELETE` | `/tasks/{id}` | number of deleted rows   |
//!
//! Every handled request answers `200 OK` with an [`Envelope`]; storage
//! failures are reported inside it with `success: false`.

pub mod envelope;

use crate::db::error::{Operation, StorageError};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task};
use crate::{msg_error, msg_info};
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use envelope::Envelope;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared state of the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Tasks,
}

/// Builds the router. The tasks table is expected to exist already.
pub fn router(tasks: Tasks) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(new_task))
        .route("/tasks/{id}", put(complete_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { tasks })
}

/// Prepares the database and serves the API on `listener` until `shutdown` resolves.
///
/// A failure to create the table is reported but does not stop the server:
/// requests will then carry the storage error back to the client.
pub async fn serve<F>(listener: TcpListener, tasks: Tasks, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = tasks.db().clone();
    let started = match tokio::task::spawn_blocking(move || db.start_database()).await {
        Ok(result) => result,
        Err(e) => Err(StorageError::general(Operation::CreateTable, e)),
    };
    match started {
        Ok(()) => msg_info!(Message::DatabaseReady(tasks.db().path().display().to_string())),
        Err(e) => {
            error!(path = %tasks.db().path().display(), error = %e, "could not prepare the tasks table");
            msg_error!(Message::DatabaseStartFailed(e.to_string()));
        }
    }

    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "task API listening");
    }

    axum::serve(listener, router(tasks)).with_graceful_shutdown(shutdown).await
}

async fn new_task(State(state): State<AppState>, Json(task): Json<NewTask>) -> Json<Envelope<i64>> {
    let tasks = state.tasks.clone();
    let result = run_blocking(Operation::Insert, move || tasks.insert(&task)).await;
    if let Ok(id) = &result {
        info!(id, "task created");
    }
    Json(Envelope::from(result))
}

async fn list_tasks(State(state): State<AppState>) -> Json<Envelope<Vec<Task>>> {
    let tasks = state.tasks.clone();
    let result = run_blocking(Operation::Select, move || tasks.fetch()).await;
    Json(Envelope::from(result))
}

async fn complete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Envelope<usize>> {
    let tasks = state.tasks.clone();
    let result = run_blocking(Operation::Update, move || tasks.complete(id)).await;
    if let Ok(updated) = &result {
        info!(id, updated, "task completion requested");
    }
    Json(Envelope::from(result))
}

async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Json<Envelope<usize>> {
    let tasks = state.tasks.clone();
    let result = run_blocking(Operation::Delete, move || tasks.delete(id)).await;
    if let Ok(deleted) = &result {
        info!(id, deleted, "task deletion requested");
    }
    Json(Envelope::from(result))
}

/// Runs a storage call on the blocking pool and logs its failure.
async fn run_blocking<T, F>(operation: Operation, call: F) -> Result<T, StorageError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
{
    let result = match tokio::task::spawn_blocking(call).await {
        Ok(result) => result,
        Err(e) => Err(StorageError::general(operation, e)),
    };
    if let Err(e) = &result {
        error!(operation = %e.operation(), error = %e, "storage call failed");
    }
    result
}
