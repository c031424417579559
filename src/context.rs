//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{HttpTodoApi, TaskDraft, TaskListController};

use crate::browser::BrowserPrompt;
use crate::store::{FormSignals, ListStore, SignalTaskView};

pub type Controller = TaskListController<HttpTodoApi, BrowserPrompt, SignalTaskView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    /// Rendered list
    pub store: ListStore,
    /// New-task form inputs
    pub form: FormSignals,
}

impl AppContext {
    pub fn new(controller: Controller, store: ListStore, form: FormSignals) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            store,
            form,
        }
    }

    /// Reload the list from the backend
    pub fn load(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.load_tasks().await;
        });
    }

    /// Submit the form contents
    pub fn add(&self) {
        let draft = TaskDraft::new(
            self.form.content.get_untracked(),
            self.form.notes.get_untracked(),
            self.form.due_date.get_untracked(),
        );
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.add_task(draft).await;
        });
    }

    pub fn toggle(&self, id: u32, current_status: bool) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.toggle_complete(id, current_status).await;
        });
    }

    pub fn delete(&self, id: u32) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.delete_task(id).await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
