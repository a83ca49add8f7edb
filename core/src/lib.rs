//! Client core for the todo list: API codec, forms, and the list component.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TodoApp` drives those
//! round-trips through an injected `Transport`, keeps the in-memory list in
//! step with the writes the mock backend never persists, and notifies an
//! injected `Observer` after each change.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Forms keep raw control text and validate on submit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod forms;
pub mod http;
pub mod types;
#[cfg(feature = "ureq")]
pub mod ureq_transport;

pub use app::TodoApp;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use event::{Ignore, Observer, Operation, StateChange};
pub use forms::{CreateForm, DeleteForm, FormError, FormKind, UpdateForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateTodo, TodoItem};
#[cfg(feature = "ureq")]
pub use ureq_transport::UreqTransport;
