//! Form state for the create, update, and delete actions.
//!
//! Forms hold raw control values (text as typed, plus the `completed`
//! checkbox). Conversion to typed payloads happens on submit and is where
//! the required-field and integer checks live.

use std::fmt;

use crate::types::{CreateTodo, TodoItem};

/// Why a form could not be turned into a request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required control is empty or blank.
    Required(&'static str),

    /// A numeric control holds text that is not a non-negative integer.
    NotAnInteger { field: &'static str, value: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required(field) => write!(f, "{field} is required"),
            FormError::NotAnInteger { field, value } => {
                write!(f, "{field} must be an integer, got {value:?}")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Which form a `FormEdited` event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Update,
    Delete,
}

/// Rejects blank text but hands back the value exactly as typed.
fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value)
}

fn required_integer(field: &'static str, value: &str) -> Result<u64, FormError> {
    let trimmed = required(field, value)?.trim();
    trimmed.parse().map_err(|_| FormError::NotAnInteger {
        field,
        value: trimmed.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub user_id: String,
    pub title: String,
    pub completed: bool,
}

impl CreateForm {
    pub fn to_payload(&self) -> Result<CreateTodo, FormError> {
        Ok(CreateTodo {
            user_id: required_integer("userId", &self.user_id)?,
            title: required("title", &self.title)?.to_string(),
            completed: self.completed,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
}

impl UpdateForm {
    pub fn to_item(&self) -> Result<TodoItem, FormError> {
        Ok(TodoItem {
            id: required_integer("id", &self.id)?,
            user_id: required_integer("userId", &self.user_id)?,
            title: required("title", &self.title)?.to_string(),
            completed: self.completed,
        })
    }

    /// Overwrite every control with the fields of `item`.
    pub fn fill_from(&mut self, item: &TodoItem) {
        self.id = item.id.to_string();
        self.user_id = item.user_id.to_string();
        self.title.clone_from(&item.title);
        self.completed = item.completed;
    }

    /// Whether the form is valid and holds values other than `stored`.
    ///
    /// An invalid form never counts as a change: there is nothing to submit.
    pub fn differs_from(&self, stored: &TodoItem) -> bool {
        match self.to_item() {
            Ok(edited) => edited != *stored,
            Err(_) => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl From<&TodoItem> for UpdateForm {
    fn from(item: &TodoItem) -> Self {
        let mut form = Self::default();
        form.fill_from(item);
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteForm {
    pub id: String,
}

impl DeleteForm {
    pub fn target_id(&self) -> Result<u64, FormError> {
        required_integer("id", &self.id)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> TodoItem {
        TodoItem {
            id: 1,
            user_id: 2,
            title: "a".to_string(),
            completed: false,
        }
    }

    #[test]
    fn create_form_requires_user_and_title() {
        let mut form = CreateForm::default();
        assert_eq!(form.to_payload(), Err(FormError::Required("userId")));

        form.user_id = "4".to_string();
        form.title = "   ".to_string();
        assert_eq!(form.to_payload(), Err(FormError::Required("title")));

        form.title = "walk".to_string();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.user_id, 4);
        assert!(!payload.completed);
    }

    #[test]
    fn non_numeric_user_id_is_rejected() {
        let form = CreateForm {
            user_id: "abc".to_string(),
            title: "t".to_string(),
            completed: true,
        };
        assert!(matches!(
            form.to_payload(),
            Err(FormError::NotAnInteger { field: "userId", .. })
        ));
    }

    #[test]
    fn unchanged_form_is_not_dirty_regardless_of_key_order() {
        let reordered: TodoItem =
            serde_json::from_str(r#"{"completed":false,"title":"a","id":1,"userId":2}"#).unwrap();
        let form = UpdateForm::from(&reordered);
        assert!(!form.differs_from(&stored()));
    }

    #[test]
    fn any_single_field_change_makes_form_dirty() {
        let base = UpdateForm::from(&stored());

        let mut form = base.clone();
        form.user_id = "3".to_string();
        assert!(form.differs_from(&stored()));

        let mut form = base.clone();
        form.title = "b".to_string();
        assert!(form.differs_from(&stored()));

        let mut form = base;
        form.completed = true;
        assert!(form.differs_from(&stored()));
    }

    #[test]
    fn invalid_form_is_never_dirty() {
        let mut form = UpdateForm::from(&stored());
        form.title.clear();
        assert!(!form.differs_from(&stored()));
    }

    #[test]
    fn title_keeps_surrounding_whitespace() {
        let padded = TodoItem {
            title: " padded ".to_string(),
            ..stored()
        };
        let form = UpdateForm::from(&padded);
        assert_eq!(form.to_item().unwrap().title, " padded ");
        assert!(!form.differs_from(&padded));

        let create = CreateForm {
            user_id: " 4 ".to_string(),
            title: "  walk".to_string(),
            completed: false,
        };
        let payload = create.to_payload().unwrap();
        assert_eq!(payload.user_id, 4);
        assert_eq!(payload.title, "  walk");
    }

    #[test]
    fn delete_form_parses_id() {
        let form = DeleteForm { id: " 12 ".to_string() };
        assert_eq!(form.target_id(), Ok(12));
        assert_eq!(DeleteForm::default().target_id(), Err(FormError::Required("id")));
    }

    #[test]
    fn reset_clears_every_control() {
        let mut form = UpdateForm::from(&stored());
        form.completed = true;
        form.reset();
        assert_eq!(form, UpdateForm::default());
    }
}
