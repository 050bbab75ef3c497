//! Organization settings form.
//!
//! The form owns its field state and the required-field validation; the
//! async lifecycle (loading flag, outcome reporting) belongs to the caller,
//! which supplies the submit callback.

use leptos::*;

use orgdesk_core::{FieldErrors, OrganizationDraft};

#[component]
pub fn OrganizationForm(
    /// Values to prefill the fields with.
    #[prop(optional, into)]
    initial: Option<OrganizationDraft>,
    /// Invoked with the draft once local validation passes.
    #[prop(optional, into)]
    on_submit: Option<Callback<OrganizationDraft>>,
    /// Caller-owned submission flag; disables the whole form while set.
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    let name = create_rw_signal(
        initial
            .as_ref()
            .map(|draft| draft.name.clone())
            .unwrap_or_default(),
    );
    let organization_id = create_rw_signal(
        initial
            .map(|draft| draft.organization_id)
            .unwrap_or_default(),
    );
    let field_errors = create_rw_signal(FieldErrors::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        field_errors.set(FieldErrors::new());

        let draft = OrganizationDraft::new(name.get(), organization_id.get());
        let errors = draft.validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }

        if let Some(callback) = on_submit {
            callback.call(draft);
        }
    };

    view! {
        <form class="organization-form" on:submit=submit>
            <div class="form-group">
                <label for="name">"Organization Name"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Enter organization name"
                    prop:value=move || name.get()
                    disabled=move || loading.get()
                    class:invalid=move || field_errors.with(|e| e.get("name").is_some())
                    on:input=move |ev| {
                        name.set(event_target_value(&ev));
                        field_errors.update(|errors| errors.clear_field("name"));
                    }
                />
                {move || {
                    field_errors.with(|e| {
                        e.get("name")
                            .map(|msg| view! { <p class="field-error">{msg.to_string()}</p> })
                    })
                }}
            </div>

            <div class="form-group">
                <label for="organization_id">"Organization ID"</label>
                <input
                    type="text"
                    id="organization_id"
                    placeholder="Enter organization ID"
                    prop:value=move || organization_id.get()
                    disabled=move || loading.get()
                    class:invalid=move || {
                        field_errors.with(|e| e.get("organization_id").is_some())
                    }
                    on:input=move |ev| {
                        organization_id.set(event_target_value(&ev));
                        field_errors.update(|errors| errors.clear_field("organization_id"));
                    }
                />
                {move || {
                    field_errors.with(|e| match e.get("organization_id") {
                        Some(msg) => view! { <p class="field-error">{msg.to_string()}</p> },
                        None => view! {
                            <p class="field-hint">"Unique identifier for the organization"</p>
                        },
                    })
                }}
            </div>

            <div class="form-actions">
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Saving..." } else { "Save Organization" }}
                </button>
                // Cancel empties both fields; it does not restore initial values.
                <button
                    type="button"
                    disabled=move || loading.get()
                    on:click=move |_| {
                        name.set(String::new());
                        organization_id.set(String::new());
                    }
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
