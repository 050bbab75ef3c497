//! Route guard components.
//!
//! Thin wrappers over [`GuardPolicy`]: each evaluates the policy once per
//! render against the injected session store, then either renders its
//! children or emits a history-replacing redirect.

use leptos::*;
use leptos_router::{NavigateOptions, Redirect};

use orgdesk_auth::{GuardDecision, GuardPolicy};

use crate::app::SessionContext;

/// Renders children only for authenticated users; otherwise redirects to
/// the sign-in page.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    guarded(GuardPolicy::RequireAuth, children)
}

/// Renders children only for signed-out users; otherwise redirects to the
/// authenticated landing route. Keeps signed-in users off the sign-in and
/// registration pages.
#[component]
pub fn GuestOnly(children: Children) -> impl IntoView {
    guarded(GuardPolicy::GuestOnly, children)
}

fn guarded(policy: GuardPolicy, children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    match policy.decide(session.0.has_token()) {
        GuardDecision::Allow => children().into_view(),
        GuardDecision::Redirect(to) => view! {
            <Redirect
                path=to
                options=Some(NavigateOptions {
                    replace: true,
                    ..Default::default()
                })
            />
        }
        .into_view(),
    }
}
