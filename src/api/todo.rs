use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::api::binding::{BodyOrQuery, PathParams, QueryParams};
use crate::error::AppError;
use crate::models::{Todo, TodoSearchParams, UpdateTodo};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchTodosRequest {
    pub todo_id: Option<u64>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub todo_id: u64,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// Required to bind, ignored by the update; the path id selects the record.
    pub todo_id: u64,
    pub display_name: Option<String>,
}

pub async fn get_todo(
    State(state): State<AppState>,
    PathParams(id): PathParams<u64>,
) -> Result<Json<Todo>, AppError> {
    let todo = state
        .todos
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_lookup("getting todo", e))?;
    Ok(Json(todo))
}

pub async fn search_todos(
    State(state): State<AppState>,
    QueryParams(req): QueryParams<SearchTodosRequest>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let params = TodoSearchParams {
        id: req.todo_id,
        display_name: req.display_name,
    };

    let todos = state
        .todos
        .search(&params)
        .await
        .map_err(|e| AppError::internal("searching todos", e))?;
    info!("Searching todos: {:?}", todos);

    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    BodyOrQuery(req): BodyOrQuery<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = Todo {
        id: req.todo_id,
        display_name: req.display_name.unwrap_or_default(),
    };

    state
        .todos
        .create(&todo)
        .await
        .map_err(|e| AppError::internal("creating todo", e))?;

    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    PathParams(id): PathParams<u64>,
    BodyOrQuery(req): BodyOrQuery<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let mut existing = state
        .todos
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_lookup("getting todo", e))?;

    // An absent name is written as "", there is no way to leave it unchanged here.
    let update = UpdateTodo {
        display_name: Some(req.display_name.unwrap_or_default()),
    };

    state
        .todos
        .update(&mut existing, &update)
        .await
        .map_err(|e| AppError::internal("updating todo", e))?;

    Ok(Json(existing))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    PathParams(id): PathParams<u64>,
) -> Result<Json<&'static str>, AppError> {
    let todo = state
        .todos
        .get_by_id(id)
        .await
        .map_err(|e| AppError::from_lookup("getting todo", e))?;

    state
        .todos
        .delete(&todo)
        .await
        .map_err(|e| AppError::internal("deleting todo", e))?;

    Ok(Json("Todo deleted."))
}
