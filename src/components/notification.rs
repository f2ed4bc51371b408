//! Notification Component
//!
//! Renders the single-slot transient message while it is visible.

use leptos::prelude::*;

use crate::store::use_app_store;

#[component]
pub fn Notification() -> impl IntoView {
    let notifier = use_app_store().notifier;
    let message = notifier.message;
    let visible = notifier.visible;

    view! {
        <Show when=move || visible.get()>
            <div class="notification show">
                <span>{move || message.get()}</span>
            </div>
        </Show>
    }
}
