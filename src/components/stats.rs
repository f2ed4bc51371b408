//! Stats Component
//!
//! Aggregate counters derived from the mirrored collection. All three
//! values recompute from the same snapshot.

use leptos::prelude::*;

use crate::models;
use crate::store::use_app_store;

#[component]
pub fn Stats() -> impl IntoView {
    let items = use_app_store().items;
    let stats = Memo::new(move |_| items.with(|items| models::Stats::tally(items)));

    view! {
        <div class="stats">
            <div class="stat-item">
                <div class="stat-value" id="total-items" data-cy="total-items">
                    {move || stats.get().total}
                </div>
                <div class="stat-label">"Total Items"</div>
            </div>
            <div class="stat-item">
                <div class="stat-value" id="active-items" data-cy="active-items">
                    {move || stats.get().active}
                </div>
                <div class="stat-label">"To Buy"</div>
            </div>
            <div class="stat-item">
                <div class="stat-value" id="bought-items" data-cy="bought-items">
                    {move || stats.get().bought}
                </div>
                <div class="stat-label">"Bought"</div>
            </div>
        </div>
    }
}
