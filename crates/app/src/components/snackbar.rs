//! Auto-dismissing notification snackbar.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use orgdesk_core::{Notification, NOTIFICATION_AUTO_HIDE_MS};

use crate::cancel::CancelGuard;
use crate::timer;

/// Renders the owning view's [`Notification`] and hides it again after
/// [`NOTIFICATION_AUTO_HIDE_MS`] or on manual close.
///
/// Each time a notification is shown the epoch advances, so a timer armed
/// for an earlier notification never dismisses a later one.
#[component]
pub fn Snackbar(notice: RwSignal<Notification>) -> impl IntoView {
    let epoch = Rc::new(Cell::new(0u64));
    let cancel = CancelGuard::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    create_effect({
        let epoch = epoch.clone();
        move |_| {
            if !notice.with(|n| n.visible) {
                return;
            }

            let shown = epoch.get() + 1;
            epoch.set(shown);

            let epoch = epoch.clone();
            let cancel = cancel.clone();
            spawn_local(async move {
                timer::sleep(NOTIFICATION_AUTO_HIDE_MS as i32).await;
                if cancel.is_cancelled() || epoch.get() != shown {
                    return;
                }
                notice.update(|n| n.dismiss());
            });
        }
    });

    view! {
        {move || {
            notice.with(|n| n.visible).then(|| {
                let severity = notice.with_untracked(|n| n.severity);
                let message = notice.with_untracked(|n| n.message.clone());
                view! {
                    <div class=format!("snackbar {severity}")>
                        <span>{message}</span>
                        <button
                            type="button"
                            class="snackbar-close"
                            on:click=move |_| notice.update(|n| n.dismiss())
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                }
            })
        }}
    }
}
