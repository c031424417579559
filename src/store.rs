//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds only the last rendered projection, never task state of its own.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{TaskListSnapshot, TaskRow, TaskView};

/// What the list currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Rows from the last successful load, in server order
    pub rows: Vec<TaskRow>,
    /// Tasks not yet completed
    pub pending: usize,
    /// A load is in flight
    pub loading: bool,
    /// At least one load has succeeded
    pub loaded: bool,
    /// Bumped on every render so rows are rebuilt, not diffed
    pub generation: u32,
}

pub type ListStore = Store<ListState>;

/// Values bound to the new-task form
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub content: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub due_date: RwSignal<String>,
}

impl FormSignals {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
        }
    }
}

/// TaskView that writes into the store and the form signals
#[derive(Clone, Copy)]
pub struct SignalTaskView {
    store: ListStore,
    form: FormSignals,
}

impl SignalTaskView {
    pub fn new(store: ListStore, form: FormSignals) -> Self {
        Self { store, form }
    }
}

impl TaskView for SignalTaskView {
    fn render(&self, snapshot: TaskListSnapshot) {
        let TaskListSnapshot { rows, pending } = snapshot;
        *self.store.rows().write() = rows;
        *self.store.pending().write() = pending;
        *self.store.loaded().write() = true;
        *self.store.generation().write() += 1;
    }

    fn clear_inputs(&self) {
        self.form.content.set(String::new());
        self.form.notes.set(String::new());
        self.form.due_date.set(String::new());
    }

    fn set_loading(&self, loading: bool) {
        *self.store.loading().write() = loading;
    }
}
