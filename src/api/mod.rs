pub mod binding;
pub mod todo;
