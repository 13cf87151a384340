use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, number, date, password, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Extra attribute for number inputs
    #[prop(optional)]
    step: Option<&'static str>,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Field value
    value: RwSignal<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Validation message for this field
    #[prop(into, default = Signal::stored(None))]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                step=step
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.get().map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Labelled checkbox bound to a bool signal
#[component]
pub fn CheckboxField(
    /// Field label text
    label: &'static str,
    /// Checked state
    checked: RwSignal<bool>,
    /// Optional description text below checkbox
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="flex items-start gap-3 cursor-pointer">
            <input
                type="checkbox"
                class="mt-1 w-4 h-4 rounded border-theme-primary text-theme-accent focus:ring-2 focus:ring-theme-accent"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <div class="flex-1">
                <span class="label">{label}</span>
                {description.map(|desc| view! {
                    <p class="text-sm text-theme-muted mt-0.5">{desc}</p>
                })}
            </div>
        </label>
    }
}
