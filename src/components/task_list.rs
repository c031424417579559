//! Task List Component
//!
//! Renders the last loaded projection. Rows are keyed on the render
//! generation so each load replaces the whole list.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::store::ListStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let pending_label = move || match store.pending().get() {
        1 => "1 task pending".to_string(),
        n => format!("{} tasks pending", n),
    };

    view! {
        <section class="task-list">
            <p class="pending-count">
                {pending_label}
                <Show when=move || store.loading().get()>
                    <span class="loading">" · loading…"</span>
                </Show>
            </p>

            <Show when=move || store.loaded().get() && store.rows().get().is_empty()>
                <p class="empty-state">"Nothing to do."</p>
            </Show>

            <ul class="tasks">
                <For
                    each=move || {
                        let generation = store.generation().get();
                        store.rows().get().into_iter().map(move |row| (generation, row))
                    }
                    key=|(generation, row)| (*generation, row.task.id)
                    children=move |(_, row)| view! { <TaskItem row=row /> }
                />
            </ul>
        </section>
    }
}
