//! Dashboard layout shell.

use leptos::*;

/// App chrome for authenticated pages: header plus a main content area.
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1>"orgdesk"</h1>
            </header>
            <main>{children()}</main>
        </div>
    }
}
