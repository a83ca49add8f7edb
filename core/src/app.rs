//! The todo list component: in-memory list, three forms, four operations.
//!
//! # Design
//! `TodoApp` owns all mutable state. The HTTP round-trip goes through the
//! injected [`Transport`] and every state mutation is reported to the
//! injected [`Observer`] once the new state is in place.
//!
//! The backend is a mock that accepts writes without applying them to later
//! reads, so successful create/update/delete calls are mirrored onto the local
//! list by id instead of re-fetching. A failed call changes neither the list
//! nor the forms; its message is kept in `last_error` until the next success.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::event::{Observer, Operation, StateChange};
use crate::forms::{CreateForm, DeleteForm, FormKind, UpdateForm};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::TodoItem;

pub struct TodoApp<T, O> {
    client: TodoClient,
    transport: T,
    observer: O,
    page_limit: usize,
    todos: Vec<TodoItem>,
    create_form: CreateForm,
    update_form: UpdateForm,
    delete_form: DeleteForm,
    last_error: Option<String>,
}

impl<T: Transport, O: Observer> TodoApp<T, O> {
    /// Build an empty component. Call [`TodoApp::load`] to populate it.
    pub fn new(config: &ClientConfig, transport: T, observer: O) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            transport,
            observer,
            page_limit: config.page_limit,
            todos: Vec::new(),
            create_form: CreateForm::default(),
            update_form: UpdateForm::default(),
            delete_form: DeleteForm::default(),
            last_error: None,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn update_form(&self) -> &UpdateForm {
        &self.update_form
    }

    pub fn delete_form(&self) -> &DeleteForm {
        &self.delete_form
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn find(&self, id: u64) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == id)
    }

    /// Replace the list with the first `page_limit` items from the server.
    pub fn load(&mut self) -> Result<usize, ApiError> {
        let request = self.client.build_list_todos(self.page_limit);
        match self.round_trip(request, TodoClient::parse_list_todos) {
            Ok(todos) => {
                self.todos = todos;
                let count = self.todos.len();
                self.succeed(StateChange::Loaded { count });
                Ok(count)
            }
            Err(err) => Err(self.fail(Operation::Load, err)),
        }
    }

    /// Submit the create form and append the server's item to the list.
    pub fn create(&mut self) -> Result<TodoItem, ApiError> {
        let result = self
            .create_form
            .to_payload()
            .map_err(ApiError::from)
            .and_then(|payload| self.client.build_create_todo(&payload))
            .and_then(|request| self.round_trip(request, TodoClient::parse_create_todo));
        match result {
            Ok(created) => {
                self.todos.push(created.clone());
                self.create_form.reset();
                self.succeed(StateChange::Created { id: created.id });
                Ok(created)
            }
            Err(err) => Err(self.fail(Operation::Create, err)),
        }
    }

    /// Submit the update form and patch the local entry with the same id.
    ///
    /// Returns whether a local entry was patched; an id missing from the
    /// list is a successful no-op.
    pub fn update(&mut self) -> Result<bool, ApiError> {
        let result = self.update_form.to_item().map_err(ApiError::from).and_then(|item| {
            let request = self.client.build_update_todo(&item)?;
            self.round_trip(request, TodoClient::parse_update_todo)?;
            Ok(item)
        });
        match result {
            Ok(item) => {
                let patched = match self.todos.iter_mut().find(|t| t.id == item.id) {
                    Some(entry) => {
                        entry.patch_from(&item);
                        true
                    }
                    None => false,
                };
                self.update_form.reset();
                self.delete_form.reset();
                self.succeed(StateChange::Updated { id: item.id, patched });
                Ok(patched)
            }
            Err(err) => Err(self.fail(Operation::Update, err)),
        }
    }

    /// Submit the delete form and drop every local entry with that id.
    ///
    /// Returns the number of entries removed.
    pub fn delete(&mut self) -> Result<usize, ApiError> {
        let result = self.delete_form.target_id().map_err(ApiError::from).and_then(|id| {
            let request = self.client.build_delete_todo(id);
            self.round_trip(request, TodoClient::parse_delete_todo)?;
            Ok(id)
        });
        match result {
            Ok(id) => {
                let before = self.todos.len();
                self.todos.retain(|t| t.id != id);
                let removed = before - self.todos.len();
                self.update_form.reset();
                self.delete_form.reset();
                self.succeed(StateChange::Deleted { id, removed });
                Ok(removed)
            }
            Err(err) => Err(self.fail(Operation::Delete, err)),
        }
    }

    /// Copy the item with `id` into the update and delete forms.
    ///
    /// Returns false, leaving both forms untouched, when `id` is not listed.
    pub fn select(&mut self, id: u64) -> bool {
        let Some(item) = self.todos.iter().find(|t| t.id == id) else {
            debug!(id, "select ignored: id not in list");
            return false;
        };
        self.update_form.fill_from(item);
        self.delete_form.id = item.id.to_string();
        self.emit(StateChange::Selected { id });
        true
    }

    /// Whether the update action should be offered: the form is valid, the
    /// id is listed, and at least one field differs from the stored entry.
    pub fn is_update_enabled(&self) -> bool {
        let Ok(id) = self.update_form.id.trim().parse::<u64>() else {
            return false;
        };
        self.find(id)
            .is_some_and(|stored| self.update_form.differs_from(stored))
    }

    pub fn edit_create_form(&mut self, edit: impl FnOnce(&mut CreateForm)) {
        edit(&mut self.create_form);
        self.emit(StateChange::FormEdited(FormKind::Create));
    }

    pub fn edit_update_form(&mut self, edit: impl FnOnce(&mut UpdateForm)) {
        edit(&mut self.update_form);
        self.emit(StateChange::FormEdited(FormKind::Update));
    }

    pub fn edit_delete_form(&mut self, edit: impl FnOnce(&mut DeleteForm)) {
        edit(&mut self.delete_form);
        self.emit(StateChange::FormEdited(FormKind::Delete));
    }

    fn round_trip<R>(
        &self,
        request: HttpRequest,
        parse: impl FnOnce(&TodoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        parse(&self.client, response)
    }

    fn succeed(&mut self, change: StateChange) {
        self.last_error = None;
        self.emit(change);
    }

    fn fail(&mut self, operation: Operation, err: ApiError) -> ApiError {
        warn!(%operation, error = %err, "operation failed");
        let message = format!("{operation} failed: {err}");
        self.last_error = Some(message.clone());
        self.emit(StateChange::Failed { operation, message });
        err
    }

    fn emit(&mut self, change: StateChange) {
        debug!(?change, "state changed");
        self.observer.state_changed(&change);
    }
}
