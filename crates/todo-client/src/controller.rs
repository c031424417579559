//! Task List Controller
//!
//! Keeps the rendered list a projection of the last successful fetch.
//! Every mutation is "send, then reload": nothing is patched locally.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime};

use crate::api::TodoApi;
use crate::models::{TaskDraft, TaskListSnapshot, TaskPatch};

const DELETE_PROMPT: &str = "Delete this task?";

/// Blocking user dialogs
pub trait Prompt {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// Where the list ends up on screen
pub trait TaskView {
    /// Replace the whole list
    fn render(&self, snapshot: TaskListSnapshot);
    /// Reset the new-task form
    fn clear_inputs(&self);
    /// At least one load is in flight
    fn set_loading(&self, loading: bool);
}

/// Wall clock used for overdue flags
fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct TaskListController<A, P, V> {
    api: A,
    prompt: P,
    view: V,
    clock: fn() -> NaiveDateTime,
    loads_in_flight: Cell<usize>,
}

impl<A: TodoApi, P: Prompt, V: TaskView> TaskListController<A, P, V> {
    pub fn new(api: A, prompt: P, view: V) -> Self {
        Self {
            api,
            prompt,
            view,
            clock: local_now,
            loads_in_flight: Cell::new(0),
        }
    }

    /// Override the clock used for overdue flags
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch all tasks and replace the rendered list.
    ///
    /// Failures leave the last good render in place.
    pub async fn load_tasks(&self) {
        self.begin_load();
        match self.api.list().await {
            Ok(tasks) => {
                let snapshot = TaskListSnapshot::project(tasks, (self.clock)());
                log::debug!("[LIST] Loaded {} tasks, {} pending", snapshot.len(), snapshot.pending);
                self.view.render(snapshot);
            }
            Err(e) => log::error!("[LIST] Failed to load tasks: {}", e),
        }
        self.end_load();
    }

    /// Create a task from form input, then reload.
    ///
    /// Invalid input is reported to the user and nothing is sent.
    pub async fn add_task(&self, draft: TaskDraft) {
        let new_task = match draft.validate() {
            Ok(new_task) => new_task,
            Err(e) => {
                log::warn!("[LIST] Rejected new task: {}", e);
                if e.is_user_facing() {
                    self.prompt.alert(&e.to_string());
                }
                return;
            }
        };

        match self.api.create(&new_task).await {
            Ok(created) => log::debug!("[LIST] Created task #{}", created.id),
            Err(e) => log::error!("[LIST] Failed to create task: {}", e),
        }
        self.view.clear_inputs();
        self.load_tasks().await;
    }

    /// Delete after the user confirms, then reload
    pub async fn delete_task(&self, id: u32) {
        if !self.prompt.confirm(DELETE_PROMPT) {
            log::debug!("[LIST] Delete of #{} cancelled", id);
            return;
        }

        if let Err(e) = self.api.delete(id).await {
            log::error!("[LIST] Failed to delete task #{}: {}", id, e);
        }
        self.load_tasks().await;
    }

    /// Flip completion relative to what the row showed, then reload
    pub async fn toggle_complete(&self, id: u32, current_status: bool) {
        let patch = TaskPatch::completed(!current_status);
        if let Err(e) = self.api.update(id, &patch).await {
            log::error!("[LIST] Failed to update task #{}: {}", id, e);
        }
        self.load_tasks().await;
    }

    fn begin_load(&self) {
        let in_flight = self.loads_in_flight.get() + 1;
        self.loads_in_flight.set(in_flight);
        if in_flight == 1 {
            self.view.set_loading(true);
        }
    }

    fn end_load(&self) {
        let in_flight = self.loads_in_flight.get().saturating_sub(1);
        self.loads_in_flight.set(in_flight);
        if in_flight == 0 {
            self.view.set_loading(false);
        }
    }
}
