pub mod todo;

pub use todo::{Todo, TodoSearchParams, UpdateTodo};
