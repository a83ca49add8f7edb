//! State-changed notifications emitted by `TodoApp`.
//!
//! The rendering layer subscribes by passing an [`Observer`] to
//! `TodoApp::new`; every mutation of the list or the forms emits exactly one
//! event after the state has been updated.

use std::fmt;

use crate::forms::FormKind;

/// The user-facing action an event or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// The list was replaced by a fresh fetch.
    Loaded { count: usize },
    /// The server-returned item was appended.
    Created { id: u64 },
    /// `patched` is false when no local entry had the id.
    Updated { id: u64, patched: bool },
    Deleted { id: u64, removed: usize },
    /// Both the update and delete forms now hold this item.
    Selected { id: u64 },
    FormEdited(FormKind),
    /// The operation left list and forms untouched.
    Failed { operation: Operation, message: String },
}

pub trait Observer {
    fn state_changed(&mut self, change: &StateChange);
}

impl<F: FnMut(&StateChange)> Observer for F {
    fn state_changed(&mut self, change: &StateChange) {
        self(change)
    }
}

/// Observer that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Observer for Ignore {
    fn state_changed(&mut self, _change: &StateChange) {}
}
