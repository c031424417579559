//! Task Item Component
//!
//! One row: completion toggle, content, due date, notes, delete.

use leptos::prelude::*;
use todo_client::TaskRow;

use crate::context::use_app_context;
use crate::markdown::{is_blank, render_notes};

const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let TaskRow { task, overdue } = row;
    let id = task.id;
    let completed = task.completed;

    let mut class = String::from("task-row");
    if completed {
        class.push_str(" completed");
    }
    if overdue {
        class.push_str(" overdue");
    }

    let created = task.created_label().unwrap_or_default();

    view! {
        <li class=class title=created>
            <input
                type="checkbox"
                class="toggle"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id, completed)
            />

            <span class="task-content">{task.content}</span>

            {task.due_date.map(|due| view! {
                <span class=if overdue { "due-date overdue" } else { "due-date" }>
                    {due.format(DUE_FORMAT).to_string()}
                    {overdue.then_some(" (overdue)")}
                </span>
            })}

            {task.notes.filter(|notes| !is_blank(notes)).map(|notes| view! {
                <div class="task-notes" inner_html=render_notes(&notes) />
            })}

            <button class="delete-btn" title="Delete" on:click=move |_| ctx.delete(id)>"×"</button>
        </li>
    }
}
