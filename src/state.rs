use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::{SqliteTodoRepository, TodoRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        let todos = Arc::new(SqliteTodoRepository::new(db.clone()));
        Self { db, todos }
    }

    pub fn with_repository(db: SqlitePool, todos: Arc<dyn TodoRepository>) -> Self {
        Self { db, todos }
    }
}
