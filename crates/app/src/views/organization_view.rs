//! Organization management view.
//!
//! Owns the async submission lifecycle the form delegates: the loading
//! flag, the (simulated) save call, and the outcome notification.

use leptos::*;

use orgdesk_core::{Notification, OrganizationDraft};

use crate::cancel::CancelGuard;
use crate::components::Snackbar;
use crate::timer;
use crate::views::OrganizationForm;

/// Fixed delay standing in for the real save endpoint.
const SIMULATED_SAVE_DELAY_MS: i32 = 1_200;

#[component]
pub fn OrganizationView() -> impl IntoView {
    let loading = create_rw_signal(false);
    let notice = create_rw_signal(Notification::hidden());

    let cancel = CancelGuard::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let on_submit = Callback::new(move |draft: OrganizationDraft| {
        loading.set(true);

        let cancel = cancel.clone();
        spawn_local(async move {
            let result = save_organization(&draft).await;
            if cancel.is_cancelled() {
                return;
            }
            loading.set(false);

            match result {
                Ok(()) => notice.set(Notification::success("Organization saved")),
                Err(err) => {
                    tracing::error!("organization save failed: {err}");
                    notice.set(Notification::error("Failed to save organization"));
                }
            }
        });
    });

    view! {
        <section class="organization">
            <h2>"Organization"</h2>
            <OrganizationForm on_submit=on_submit loading=loading/>
            <Snackbar notice=notice/>
        </section>
    }
}

/// Stand-in for the real save endpoint: a fixed delay, then success.
async fn save_organization(draft: &OrganizationDraft) -> Result<(), String> {
    tracing::debug!("saving organization {}", draft.organization_id);
    timer::sleep(SIMULATED_SAVE_DELAY_MS).await;
    Ok(())
}
