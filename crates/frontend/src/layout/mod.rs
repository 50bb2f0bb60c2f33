pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell: header with entity tabs above the page content
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
