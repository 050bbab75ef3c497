//! Sign-in view.
//!
//! Controlled email/password fields, one POST to the login endpoint, and a
//! branch on the classified response: persist the token and navigate, show
//! inline field errors, or raise a snackbar.

use leptos::*;
use leptos_router::A;

use orgdesk_auth::{Credentials, SignInError, LANDING_ROUTE};
use orgdesk_core::{FieldErrors, Notification};

use crate::api;
use crate::app::SessionContext;
use crate::cancel::CancelGuard;
use crate::components::Snackbar;
use crate::config;

/// Message shown when the request itself failed; detail goes to the log.
const GENERIC_RETRY_MESSAGE: &str = "Something went wrong, please try again";

#[component]
pub fn SignInView() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);
    let loading = create_rw_signal(false);
    let field_errors = create_rw_signal(FieldErrors::new());
    let notice = create_rw_signal(Notification::hidden());

    let cancel = CancelGuard::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        field_errors.set(FieldErrors::new());
        loading.set(true);

        let credentials = Credentials::new(email.get(), password.get());
        let store = session.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = api::sign_in(config::api_base_url(), &credentials).await;
            if cancel.is_cancelled() {
                return;
            }
            loading.set(false);

            match result {
                Ok(token) => {
                    if let Err(err) = store.0.set_token(&token) {
                        tracing::error!("failed to persist session token: {err}");
                        notice.set(Notification::error(GENERIC_RETRY_MESSAGE));
                        return;
                    }
                    leptos_router::use_navigate()(LANDING_ROUTE, Default::default());
                }
                Err(SignInError::Validation(fields)) => {
                    field_errors.set(fields);
                }
                Err(SignInError::MissingToken) => {
                    notice.set(Notification::error("No token found in response"));
                }
                Err(SignInError::General { message }) => {
                    notice.set(Notification::error(message));
                }
                Err(SignInError::Transport(detail)) => {
                    tracing::error!("sign-in request failed: {detail}");
                    notice.set(Notification::error(GENERIC_RETRY_MESSAGE));
                }
            }
        });
    };

    view! {
        <section class="auth-card">
            <h1>"Sign in"</h1>
            <p class="auth-prompt">
                "Don\u{2019}t have an account? "
                <A href="/register">"Get started"</A>
            </p>

            <form on:submit=submit>
                <div class="form-group">
                    <label for="email">"Email address"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        class:invalid=move || field_errors.with(|e| e.get("email").is_some())
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            field_errors.update(|errors| errors.clear_field("email"));
                        }
                    />
                    {move || {
                        field_errors.with(|e| {
                            e.get("email")
                                .map(|msg| view! { <p class="field-error">{msg.to_string()}</p> })
                        })
                    }}
                </div>

                <a class="forgot-password" href="#">"Forgot password?"</a>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <div class="password-input">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            prop:value=move || password.get()
                            class:invalid=move || {
                                field_errors.with(|e| e.get("password").is_some())
                            }
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|errors| errors.clear_field("password"));
                            }
                        />
                        <button
                            type="button"
                            class="toggle-password"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        field_errors.with(|e| {
                            e.get("password")
                                .map(|msg| view! { <p class="field-error">{msg.to_string()}</p> })
                        })
                    }}
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </div>
            </form>

            <Snackbar notice=notice/>
        </section>
    }
}
