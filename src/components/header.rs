//! Page Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header text-center">
            <div class="app-container">
                <h1>
                    <i class="bi bi-cart-check"></i>
                    " Family Grocery List"
                </h1>
                <p class="lead">"Plan your shopping together and never forget anything!"</p>
            </div>
        </div>
    }
}
