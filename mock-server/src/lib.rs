//! Stand-in for the public mock todo API.
//!
//! Serves a fixed, seeded list of todos. Writes are validated and answered
//! like the real service does, but never applied: every GET returns the
//! seed unchanged.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// Number of seeded todos.
pub const SEED_SIZE: u64 = 200;

/// Seeded todos per owner.
pub const TODOS_PER_USER: u64 = 20;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// PUT body. A body `id` is accepted but the path id wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTodo {
    #[serde(default)]
    pub id: Option<u64>,
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

pub type Seed = Arc<Vec<Todo>>;

/// Deterministic seed: ids `1..=SEED_SIZE`, `TODOS_PER_USER` per owner,
/// every third one completed.
pub fn seed() -> Vec<Todo> {
    (1..=SEED_SIZE)
        .map(|id| Todo {
            user_id: (id - 1) / TODOS_PER_USER + 1,
            id,
            title: format!("todo item {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    let seed: Seed = Arc::new(seed());
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(replace_todo).delete(delete_todo))
        .with_state(seed)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(seed): State<Seed>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let limit = params.limit.unwrap_or(seed.len());
    debug!(limit, "list todos");
    Json(seed.iter().take(limit).cloned().collect())
}

async fn create_todo(
    State(seed): State<Seed>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        user_id: input.user_id,
        id: seed.len() as u64 + 1,
        title: input.title,
        completed: input.completed,
    };
    debug!(id = todo.id, "create todo (not persisted)");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(seed): State<Seed>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    seed.iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn replace_todo(
    State(seed): State<Seed>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if !seed.iter().any(|t| t.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    if input.id.is_some_and(|body_id| body_id != id) {
        debug!(id, body_id = ?input.id, "body id ignored in favour of path id");
    }
    debug!(id, "replace todo (not persisted)");
    Ok(Json(Todo {
        user_id: input.user_id,
        id,
        title: input.title,
        completed: input.completed,
    }))
}

async fn delete_todo(
    State(seed): State<Seed>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !seed.iter().any(|t| t.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    debug!(id, "delete todo (not persisted)");
    Ok(Json(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_owner() {
        let todo = Todo {
            user_id: 1,
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn seed_assigns_owners_in_blocks() {
        let todos = seed();
        assert_eq!(todos.len() as u64, SEED_SIZE);
        assert_eq!(todos[0].user_id, 1);
        assert_eq!(todos[19].user_id, 1);
        assert_eq!(todos[20].user_id, 2);
        assert_eq!(todos.last().unwrap().user_id, SEED_SIZE / TODOS_PER_USER);
        assert!(todos[2].completed);
        assert!(!todos[0].completed);
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"userId":1,"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"userId":1,"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn replace_todo_accepts_body_without_id() {
        let input: ReplaceTodo =
            serde_json::from_str(r#"{"userId":2,"title":"t","completed":true}"#).unwrap();
        assert!(input.id.is_none());
        assert!(input.completed);
    }
}
