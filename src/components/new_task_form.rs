//! New Task Form Component
//!
//! Content, notes and optional due date for a new task.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.form;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.add();
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <div class="new-task-row">
                <input
                    type="text"
                    class="task-input"
                    placeholder="What needs to be done?"
                    prop:value=move || form.content.get()
                    on:input=move |ev| form.content.set(event_target_value(&ev))
                />
                <input
                    type="datetime-local"
                    class="due-input"
                    prop:value=move || form.due_date.get()
                    on:input=move |ev| form.due_date.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            <textarea
                class="notes-input"
                placeholder="Notes (markdown)"
                prop:value=move || form.notes.get()
                on:input=move |ev| form.notes.set(event_target_value(&ev))
            />
        </form>
    }
}
