//! Lead-capture form component
//!
//! Renders the fields of a [`FormProfile`], validates on submit, posts once
//! and shows the success view until the profile's reset delay elapses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{FormProfile, LeadField, LeadFormState, SubmissionState};
use crate::ui::common::{FormField, SelectField};
use crate::ui::icon::{Icon, icons};
use crate::ui::submit::submit_lead;

/// Label and placeholder of a field under a profile
fn field_text(field: LeadField, profile: &FormProfile) -> (&'static str, &'static str) {
    match field {
        LeadField::Name => (profile.copy.name_label, "John Doe"),
        LeadField::Email => ("Email Address", "john@company.com"),
        LeadField::CompanyName => ("Company Name", "Acme Inc."),
        LeadField::RevenueMaking => ("Are you making revenue?", "Select an option"),
        LeadField::Mrr => ("Monthly Recurring Revenue (MRR)", "$10,000"),
        LeadField::InvestmentRaised => ("Have you raised investment?", "Select an option"),
        LeadField::InvestmentAmount => ("Investment Amount", "$500,000"),
    }
}

const YES_NO: [(&str, &str); 2] = [("yes", "Yes"), ("no", "No")];

/// Input bound to one field of the form state
fn field_input(
    field: LeadField,
    form: RwSignal<LeadFormState>,
    profile: StoredValue<FormProfile>,
    is_submitting: Signal<bool>,
) -> AnyView {
    let (label, placeholder) = profile.with_value(|p| field_text(field, p));
    let required = profile.with_value(|p| p.requires(field)) || field.parent().is_some();
    let id = format!("lead-{}", field);
    let value = Signal::derive(move || form.with(|s| s.fields.get(field).to_string()));
    let error = Signal::derive(move || form.with(|s| s.errors.get(field).map(str::to_string)));
    let on_edit = Callback::new(move |v: String| form.update(|s| s.edit(field, v)));
    let icon = icons::for_field(field);

    if field.is_choice() {
        view! {
            <SelectField
                label=label.to_string()
                id=id
                required=required
                placeholder=placeholder
                icon=icon
                value=value
                on_change=on_edit
                options=YES_NO.to_vec()
                disabled=is_submitting
                error=error
            />
        }
        .into_any()
    } else {
        view! {
            <FormField
                label=label.to_string()
                id=id
                required=required
                input_type=if field == LeadField::Email { "email" } else { "text" }
                placeholder=placeholder.to_string()
                icon=icon
                value=value
                on_input=on_edit
                disabled=is_submitting
                error=error
            />
        }
        .into_any()
    }
}

#[component]
pub fn LeadCaptureForm(profile: FormProfile) -> impl IntoView {
    let form = RwSignal::new(LeadFormState::new());
    let is_submitting = Signal::derive(move || form.with(|s| s.is_submitting()));
    let is_success = Memo::new(move |_| form.with(|s| s.is_success()));

    let copy = profile.copy.clone();
    let button_class = format!(
        "w-full flex items-center justify-center gap-2 rounded-lg px-6 py-3 font-semibold text-white \
         transition-colors focus:outline-none focus:ring-2 disabled:cursor-not-allowed disabled:opacity-60 {}",
        profile.theme.button_class()
    );
    let fields: Vec<LeadField> = profile.fields().collect();
    let profile = StoredValue::new(profile);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(payload)) = form.try_update(|s| profile.with_value(|p| s.begin_submit(p)))
        else {
            return;
        };

        spawn_local(async move {
            let outcome = submit_lead(&payload).await;
            let delay = profile.with_value(|p| match outcome {
                Ok(()) => p.success_reset,
                Err(_) => p.error_reset,
            });

            let Some(Some(ticket)) = form.try_update(|s| s.complete(outcome)) else {
                return;
            };

            #[cfg(not(feature = "ssr"))]
            {
                use gloo_timers::future::TimeoutFuture;

                TimeoutFuture::new(delay.as_millis() as u32).await;
                form.update(|s| {
                    s.expire(ticket);
                });
            }
            #[cfg(feature = "ssr")]
            let _ = (delay, ticket);
        });
    };

    let render_field = move |field: LeadField| {
        if field.parent().is_some() {
            view! {
                <Show when=move || form.with(|s| s.fields.is_active(field))>
                    {move || field_input(field, form, profile, is_submitting)}
                </Show>
            }
            .into_any()
        } else {
            field_input(field, form, profile, is_submitting)
        }
    };

    let success_title = copy.success_title;
    let success_message = copy.success_message;
    let submit_label = copy.submit_label;
    let submitting_label = copy.submitting_label;

    view! {
        <Show
            when=move || is_success.get()
            fallback=move || {
                let button_class = button_class.clone();
                view! {
                    <form class="space-y-5" on:submit=on_submit novalidate=true>
                        {fields.iter().copied().map(render_field).collect_view()}

                        <button type="submit" class=button_class disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! {
                                    <Icon name=icons::LOADER class="w-5 h-5 animate-spin"/>
                                    <span>{submitting_label}</span>
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::SEND class="w-5 h-5"/>
                                    <span>{submit_label}</span>
                                }.into_any()
                            }}
                        </button>

                        {move || matches!(form.with(|s| s.state), SubmissionState::Error(_)).then(|| view! {
                            <p class="text-center text-xs text-slate-500">
                                "Check the highlighted field and try again."
                            </p>
                        })}
                    </form>
                }
            }
        >
            <div class="py-10 text-center fade-in-up" role="status">
                <div class="mx-auto mb-5 flex h-16 w-16 items-center justify-center rounded-full bg-emerald-500/10">
                    <Icon name=icons::CHECK_CIRCLE class="w-9 h-9"/>
                </div>
                <h3 class="mb-2 text-2xl font-bold text-white">{success_title}</h3>
                <p class="text-slate-400">{success_message}</p>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_label_follows_profile() {
        assert_eq!(
            field_text(LeadField::Name, &FormProfile::business_inquiry()).0,
            "Founder Name"
        );
        assert_eq!(
            field_text(LeadField::Name, &FormProfile::simple_waitlist()).0,
            "Full Name"
        );
    }

    #[test]
    fn test_every_field_has_text() {
        let profile = FormProfile::business_inquiry();
        for field in LeadField::ALL {
            let (label, placeholder) = field_text(field, &profile);
            assert!(!label.is_empty());
            assert!(!placeholder.is_empty());
        }
    }
}
