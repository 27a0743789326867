pub mod repository;

use async_trait::async_trait;

use crate::error::RepositoryError;
use crate::models::{Todo, TodoSearchParams, UpdateTodo};

pub use repository::SqliteTodoRepository;

/// Persistence for `Todo` records. Absent records are reported as
/// `RepositoryError::NotFound`; every other failure is an opaque store error.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn get_by_id(&self, id: u64) -> Result<Todo, RepositoryError>;

    /// Records matching every supplied constraint, ordered by id.
    async fn search(&self, params: &TodoSearchParams) -> Result<Vec<Todo>, RepositoryError>;

    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Persists `patch` and reflects it onto `todo`.
    async fn update(&self, todo: &mut Todo, patch: &UpdateTodo) -> Result<(), RepositoryError>;

    async fn delete(&self, todo: &Todo) -> Result<(), RepositoryError>;
}
