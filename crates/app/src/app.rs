//! Leptos application with routing.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use orgdesk_auth::SessionStore;

use crate::components::DashboardShell;
use crate::guards::{GuestOnly, RequireAuth};
use crate::session::BrowserSession;
use crate::views::{OrganizationView, SignInView};

/// Session store shared with guards and the sign-in flow through the
/// reactive context, so they depend on the abstraction rather than on
/// `localStorage` directly.
#[derive(Clone)]
pub struct SessionContext(pub Rc<dyn SessionStore>);

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(SessionContext(Rc::new(BrowserSession::new())));

    view! {
        <Router>
            <Routes>
                <Route
                    path="/"
                    view=|| view! { <RequireAuth><HomePage/></RequireAuth> }
                />
                <Route
                    path="/sign-in"
                    view=|| view! { <GuestOnly><SignInPage/></GuestOnly> }
                />
                <Route
                    path="/register"
                    view=|| view! { <GuestOnly><RegisterPage/></GuestOnly> }
                />
                <Route
                    path="/organization"
                    view=|| view! { <RequireAuth><OrganizationPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

/// Authenticated landing page.
#[component]
fn HomePage() -> impl IntoView {
    set_document_title("Dashboard - orgdesk");

    view! {
        <DashboardShell>
            <h2>"Dashboard"</h2>
            <p>"Welcome back. Manage your workspace from here."</p>
            <A href="/organization">"Organization settings"</A>
        </DashboardShell>
    }
}

/// Organization management page.
#[component]
fn OrganizationPage() -> impl IntoView {
    set_document_title("Organization - orgdesk");

    view! {
        <DashboardShell>
            <OrganizationView/>
        </DashboardShell>
    }
}

#[component]
fn SignInPage() -> impl IntoView {
    set_document_title("Sign in - orgdesk");

    view! {
        <main class="auth-layout">
            <SignInView/>
        </main>
    }
}

/// Registration placeholder, kept behind the guest guard like sign-in.
#[component]
fn RegisterPage() -> impl IntoView {
    set_document_title("Get started - orgdesk");

    view! {
        <main class="auth-layout">
            <section class="auth-card">
                <h1>"Get started"</h1>
                <p>"Registration is handled by your workspace administrator."</p>
                <A href="/sign-in">"Back to sign in"</A>
            </section>
        </main>
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}
