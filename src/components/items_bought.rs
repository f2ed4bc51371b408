//! Items Bought Component

use leptos::prelude::*;

use crate::components::GroceryItemRow;
use crate::models;
use crate::store::use_app_store;

/// Section listing the items already bought
#[component]
pub fn ItemsBought() -> impl IntoView {
    let items = use_app_store().items;
    let bought = move || models::bought(&items.get());

    view! {
        <section data-cy="bought-section">
            <h3 class="section-title">
                <i class="bi bi-check2-circle"></i>
                " Items Bought"
            </h3>
            <div class="card">
                <ul class="list-group list-group-flush" id="bought-list">
                    <Show
                        when=move || !bought().is_empty()
                        fallback=|| {
                            view! {
                                <li class="list-group-item empty-state">
                                    <div>
                                        <i class="bi bi-cart-check"></i>
                                        <h5>"No items bought yet"</h5>
                                        <p>"Mark items as bought when you purchase them"</p>
                                    </div>
                                </li>
                            }
                        }
                    >
                        <For
                            each=bought
                            key=|item| (item.id.clone(), item.name.clone(), item.bought)
                            children=|item| view! { <GroceryItemRow item=item /> }
                        />
                    </Show>
                </ul>
            </div>
        </section>
    }
}
