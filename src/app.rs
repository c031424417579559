//! Todo Frontend App
//!
//! Wires the list controller to the page and loads on mount.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{ClientConfig, HttpTodoApi, TaskListController, DEFAULT_API_PATH};

use crate::browser::{page_origin, BrowserPrompt};
use crate::components::{NewTaskForm, TaskList};
use crate::context::AppContext;
use crate::store::{FormSignals, ListState, SignalTaskView};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(ListState::default());
    let form = FormSignals::new();

    let config = match page_origin() {
        Some(origin) => ClientConfig::for_origin(&origin),
        None => {
            log::warn!("[APP] No window origin, falling back to {}", DEFAULT_API_PATH);
            ClientConfig::new(DEFAULT_API_PATH)
        }
    };
    log::info!("[APP] Task endpoint: {}", config.collection_url());

    let controller = TaskListController::new(
        HttpTodoApi::new(config),
        BrowserPrompt,
        SignalTaskView::new(store, form),
    );
    let ctx = AppContext::new(controller, store, form);

    // Provide context to all children
    provide_context(ctx);

    // Initial load
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <main class="todo-app">
            <h1>"To-Do"</h1>
            <NewTaskForm />
            <TaskList />
        </main>
    }
}
