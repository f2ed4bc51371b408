//! Family Grocery List App
//!
//! Application shell: builds the store, provides it via context and
//! lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpApi, DEFAULT_API_BASE};
use crate::components::{
    AddItemForm, Footer, Header, ItemsBought, ItemsToBuy, Notification, Stats,
};
use crate::store::{AppStore, GroceryStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = GroceryStore::new(HttpApi::new(DEFAULT_API_BASE));

    // Provide the store to all children
    provide_context(store.clone());

    // Load the collection on mount
    Effect::new({
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                store.load().await;
                let count = store.items.with_untracked(|items| items.len());
                web_sys::console::log_1(&format!("[APP] Loaded {} items", count).into());
            });
        }
    });

    view! {
        <Header />
        <div class="fruit-decoration apple"></div>
        <div class="fruit-decoration orange"></div>
        <div class="app-container">
            <Stats />
            <AddItemForm />
            <ItemsToBuy />
            <ItemsBought />
            <Footer />
        </div>
        <Notification />
    }
}
