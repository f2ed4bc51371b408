//! Add Item Form Component
//!
//! The submit button stays disabled while the trimmed draft is empty or
//! a mutating request is in flight; the draft is cleared only when the
//! add succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::store::use_app_store;

#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();
    let busy = store.busy;

    let (draft, set_draft) = signal(String::new());
    let blank = move || draft.with(|draft| draft.trim().is_empty());

    let submit = {
        let store = store.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let name = draft.get_untracked();
            let store = store.clone();
            spawn_local(async move {
                if store.add(&name).await {
                    set_draft.set(String::new());
                }
            });
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <i class="bi bi-plus-circle"></i>
                " Add New Item"
            </div>
            <div class="card-body">
                <form id="add-item-form" on:submit=submit>
                    <div class="input-group">
                        <input
                            type="text"
                            class="form-control"
                            data-cy="add-item-input"
                            placeholder="Add milk, eggs, bread..."
                            prop:value=move || draft.get()
                            attr:disabled=move || busy.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_draft.set(input.value());
                            }
                        />
                        <button
                            type="submit"
                            class="btn btn-add"
                            data-cy="add-item-button"
                            attr:disabled=move || busy.get() || blank()
                        >
                            <Show
                                when=move || busy.get()
                                fallback=|| view! { <i class="bi bi-plus-lg"></i> " Add Item" }
                            >
                                "Adding..."
                            </Show>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
