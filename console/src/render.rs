//! Text rendering of the component state.

use std::fmt;

use todo_core::{CreateForm, DeleteForm, Observer, TodoApp, TodoItem, Transport, UpdateForm};

/// A borrowed snapshot of everything the console draws.
pub struct Screen<'a> {
    pub todos: &'a [TodoItem],
    pub create: &'a CreateForm,
    pub update: &'a UpdateForm,
    pub delete: &'a DeleteForm,
    pub update_enabled: bool,
    pub last_error: Option<&'a str>,
}

impl<'a> Screen<'a> {
    pub fn of<T: Transport, O: Observer>(app: &'a TodoApp<T, O>) -> Self {
        Self {
            todos: app.todos(),
            create: app.create_form(),
            update: app.update_form(),
            delete: app.delete_form(),
            update_enabled: app.is_update_enabled(),
            last_error: app.last_error(),
        }
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "todos ({})", self.todos.len())?;
        for item in self.todos {
            let mark = if item.completed { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] #{:<4} user {:<3} {}", item.id, item.user_id, item.title)?;
        }
        writeln!(
            f,
            "create: userId={:?} title={:?} completed={}",
            self.create.user_id, self.create.title, self.create.completed
        )?;
        writeln!(
            f,
            "update: id={:?} userId={:?} title={:?} completed={} [{}]",
            self.update.id,
            self.update.user_id,
            self.update.title,
            self.update.completed,
            if self.update_enabled { "enabled" } else { "disabled" }
        )?;
        writeln!(f, "delete: id={:?}", self.delete.id)?;
        if let Some(error) = self.last_error {
            writeln!(f, "error: {error}")?;
        }
        Ok(())
    }
}
