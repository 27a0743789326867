use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub display_name: String,
}

/// Equality filter for `TodoRepository::search`. `None` leaves the attribute unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoSearchParams {
    pub id: Option<u64>,
    pub display_name: Option<String>,
}

/// Partial update: `Some` fields are written, `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodo {
    pub display_name: Option<String>,
}

impl UpdateTodo {
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(display_name) = &self.display_name {
            todo.display_name = display_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 5,
            display_name: "Buy milk".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 5, "display_name": "Buy milk" }));
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let mut todo = Todo {
            id: 1,
            display_name: "old".to_string(),
        };

        UpdateTodo::default().apply_to(&mut todo);
        assert_eq!(todo.display_name, "old");

        UpdateTodo {
            display_name: Some("new".to_string()),
        }
        .apply_to(&mut todo);
        assert_eq!(todo.id, 1);
        assert_eq!(todo.display_name, "new");
    }
}
