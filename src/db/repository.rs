use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use crate::db::TodoRepository;
use crate::error::RepositoryError;
use crate::models::{Todo, TodoSearchParams, UpdateTodo};

impl<'r> FromRow<'r, SqliteRow> for Todo {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let id = u64::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        Ok(Todo {
            id,
            display_name: row.try_get("display_name")?,
        })
    }
}

// SQLite integers are signed 64-bit.
fn db_id(id: u64) -> Result<i64, RepositoryError> {
    i64::try_from(id).map_err(|_| RepositoryError::IdOutOfRange(id))
}

#[derive(Clone)]
pub struct SqliteTodoRepository {
    db: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn get_by_id(&self, id: u64) -> Result<Todo, RepositoryError> {
        sqlx::query_as::<_, Todo>("SELECT id, display_name FROM todos WHERE id = ?")
            .bind(db_id(id)?)
            .fetch_optional(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn search(&self, params: &TodoSearchParams) -> Result<Vec<Todo>, RepositoryError> {
        let mut query =
            QueryBuilder::<Sqlite>::new("SELECT id, display_name FROM todos WHERE 1 = 1");

        if let Some(id) = params.id {
            match db_id(id) {
                Ok(id) => {
                    query.push(" AND id = ").push_bind(id);
                }
                // no stored row can carry this id
                Err(_) => return Ok(Vec::new()),
            }
        }
        if let Some(display_name) = &params.display_name {
            query.push(" AND display_name = ").push_bind(display_name.clone());
        }
        query.push(" ORDER BY id ASC");

        let todos = query.build_query_as::<Todo>().fetch_all(&self.db).await?;
        Ok(todos)
    }

    async fn create(&self, todo: &Todo) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO todos (id, display_name) VALUES (?, ?)")
            .bind(db_id(todo.id)?)
            .bind(&todo.display_name)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, todo: &mut Todo, patch: &UpdateTodo) -> Result<(), RepositoryError> {
        let rows = sqlx::query(
            "UPDATE todos SET display_name = COALESCE(?, display_name) WHERE id = ?",
        )
        .bind(&patch.display_name)
        .bind(db_id(todo.id)?)
        .execute(&self.db)
        .await?
        .rows_affected();

        if rows == 0 {
            return Err(RepositoryError::NotFound);
        }

        patch.apply_to(todo);
        Ok(())
    }

    async fn delete(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let rows = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(db_id(todo.id)?)
            .execute(&self.db)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
