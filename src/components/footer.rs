//! Page Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer text-center">
            <p>"Happy shopping!"</p>
        </footer>
    }
}
