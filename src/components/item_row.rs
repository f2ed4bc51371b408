//! Grocery Item Row Component
//!
//! A single list entry with toggle and delete controls. Both controls
//! are disabled while any mutating request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Item;
use crate::store::use_app_store;

#[component]
pub fn GroceryItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let busy = store.busy;

    let (toggle_cy, toggle_title, toggle_icon) = if item.bought {
        ("MarkAsNotBoughtBtn", "Mark as not bought", "bi bi-arrow-counterclockwise")
    } else {
        ("markAsBoughtBtn", "Mark as bought", "bi bi-check-lg")
    };

    let toggle = {
        let store = store.clone();
        let id = item.id.clone();
        let target = !item.bought;
        move |_| {
            let store = store.clone();
            let id = id.clone();
            spawn_local(async move {
                store.set_bought(&id, target).await;
            });
        }
    };

    let delete = {
        let store = store.clone();
        let id = item.id.clone();
        move |_| {
            let store = store.clone();
            let id = id.clone();
            spawn_local(async move {
                store.remove(&id).await;
            });
        }
    };

    let added = item.created_at.format("%b %e, %Y").to_string();

    view! {
        <li class="list-group-item" data-cy="grocery-item">
            <div class="item-info">
                <span class="item-name">{item.name.clone()}</span>
                <small class="item-date">{added}</small>
            </div>
            <div class="item-actions">
                <button
                    class="btn-action btn-toggle"
                    data-cy=toggle_cy
                    title=toggle_title
                    attr:disabled=move || busy.get()
                    on:click=toggle
                >
                    <i class=toggle_icon></i>
                </button>
                <button
                    class="btn-action btn-delete"
                    data-cy="delete-button"
                    title="Delete item"
                    attr:disabled=move || busy.get()
                    on:click=delete
                >
                    <i class="bi bi-trash"></i>
                </button>
            </div>
        </li>
    }
}
