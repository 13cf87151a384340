use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Modal dialog frame with header, close button and backdrop
#[component]
pub fn Modal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("backdrop-theme") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} card theme-transition", max_width)>
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{title}</h3>
                        {subtitle.map(|s| view! { <p class="subtitle">{s}</p> })}
                    </div>
                    <button
                        class="btn-icon"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="icon-standalone"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Primary/secondary button pair closing a dialog form
#[component]
pub fn DialogActions(
    /// Label of the primary button
    submit_label: &'static str,
    /// Label shown while the action runs
    #[prop(default = "Saving...")]
    busy_label: &'static str,
    /// Whether the action is running
    #[prop(into)]
    busy: Signal<bool>,
    /// Whether the primary action is destructive
    #[prop(default = false)]
    destructive: bool,
    /// Primary action
    on_submit: Callback<()>,
    /// Cancel action
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-end gap-2 divider-top pt-4">
            <button
                type="button"
                class="btn-secondary"
                on:click=move |_| on_cancel.run(())
            >
                "Cancel"
            </button>
            <button
                type="button"
                class=if destructive { "btn-danger" } else { "btn-primary" }
                disabled=move || busy.get()
                on:click=move |_| on_submit.run(())
            >
                {move || if busy.get() { busy_label } else { submit_label }}
            </button>
        </div>
    }
}
