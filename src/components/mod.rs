//! UI Components
//!
//! Leptos components for the task list page.

mod new_task_form;
mod task_list;
mod task_item;

pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_item::TaskItem;
