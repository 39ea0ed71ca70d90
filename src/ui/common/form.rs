use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error under a field
#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="mt-1.5 flex items-center gap-1.5 text-sm text-red-400" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Text input with a leading icon, label and inline error
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Input id, also used by the label
    id: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Leading icon
    icon: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Error message to display
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="lead-label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="relative">
                <span class="pointer-events-none absolute inset-y-0 left-3 flex items-center">
                    <Icon name=icon class="w-4 h-4"/>
                </span>
                <input
                    id=id
                    type=input_type
                    class="lead-input"
                    class:border-red-500=move || error.with(|e| e.is_some())
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                    aria-invalid=move || if error.with(|e| e.is_some()) { "true" } else { "false" }
                />
            </div>
            <FieldError error=error/>
        </div>
    }
}

/// Select with a leading icon, label and inline error
#[component]
pub fn SelectField(
    /// Field label text
    label: String,
    /// Select id, also used by the label
    id: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Text of the empty option
    #[prop(default = "Select an option")]
    placeholder: &'static str,
    /// Leading icon
    icon: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Error message to display
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label class="lead-label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="relative">
                <span class="pointer-events-none absolute inset-y-0 left-3 flex items-center">
                    <Icon name=icon class="w-4 h-4"/>
                </span>
                <select
                    id=id
                    class="lead-input appearance-none pr-10"
                    class:border-red-500=move || error.with(|e| e.is_some())
                    prop:value=move || value.get()
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        on_change.run(val);
                    }
                    disabled=move || disabled.get()
                >
                    <option value="">{placeholder}</option>
                    {options.into_iter().map(|(val, text)| {
                        view! {
                            <option value=val>{text}</option>
                        }
                    }).collect_view()}
                </select>
                <span class="pointer-events-none absolute inset-y-0 right-3 flex items-center">
                    <Icon name=icons::CHEVRON_DOWN class="w-4 h-4"/>
                </span>
            </div>
            <FieldError error=error/>
        </div>
    }
}
