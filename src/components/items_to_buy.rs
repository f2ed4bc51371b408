//! Items To Buy Component

use leptos::prelude::*;

use crate::components::GroceryItemRow;
use crate::models;
use crate::store::use_app_store;

/// Section listing the items still to buy
#[component]
pub fn ItemsToBuy() -> impl IntoView {
    let items = use_app_store().items;
    let to_buy = move || models::to_buy(&items.get());

    view! {
        <section data-cy="to-buy-section">
            <h3 class="section-title">
                <i class="bi bi-list-check"></i>
                " Items To Buy"
            </h3>
            <div class="card">
                <ul class="list-group list-group-flush" id="grocery-list">
                    <Show
                        when=move || !to_buy().is_empty()
                        fallback=|| {
                            view! {
                                <li class="list-group-item empty-state">
                                    <div>
                                        <i class="bi bi-emoji-smile"></i>
                                        <h5>"Your list is empty"</h5>
                                        <p>"Add some items to get started!"</p>
                                    </div>
                                </li>
                            }
                        }
                    >
                        <For
                            each=to_buy
                            // Key on the fields that can change so an update re-renders the row
                            key=|item| (item.id.clone(), item.name.clone(), item.bought)
                            children=|item| view! { <GroceryItemRow item=item /> }
                        />
                    </Show>
                </ul>
            </div>
        </section>
    }
}
