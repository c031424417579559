//! Todo Client Core
//!
//! Platform-neutral pieces of the todo frontend:
//! - models: task records and the rendered list projection
//! - api: REST bindings for the task endpoint
//! - controller: keeps the list view in sync with the backend

mod models;
mod error;
mod config;
mod api;
mod controller;


pub use models::{pending_count, NewTask, Task, TaskDraft, TaskListSnapshot, TaskPatch, TaskRow};
pub use error::{ClientError, ClientResult};
pub use config::{ClientConfig, DEFAULT_API_PATH};
pub use api::{HttpTodoApi, TodoApi};
pub use controller::{Prompt, TaskListController, TaskView};
