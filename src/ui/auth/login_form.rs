//! Login form component
//!
//! Signs in with username and password against the backend's token endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_session;
use crate::core::validation::validate_credentials;
use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Callback when login is successful
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let input_error = RwSignal::new(None::<String>);

    // Local validation problems win over the last backend error
    let error = Signal::derive(move || input_error.get().or_else(|| session.error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        let username_val = username.get();
        let password_val = password.get();
        if let Err(message) = validate_credentials(&username_val, &password_val) {
            input_error.set(Some(message));
            return;
        }
        input_error.set(None);

        spawn_local(async move {
            if session.login(username_val.trim(), &password_val).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to track your exams"
                </p>
            </div>

            <ErrorMessage error=error />

            <FormField
                label="Username"
                required=true
                autocomplete="username"
                value=username
            />
            <FormField
                label="Password"
                required=true
                input_type="password"
                autocomplete="current-password"
                value=password
            />

            <button
                type="submit"
                class="btn-primary w-full"
                disabled=move || session.loading.get()
            >
                {move || {
                    if session.loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                                "Signing in..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Sign In"</span> }.into_any()
                    }
                }}
            </button>

            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <A href="/register" attr:class="font-medium text-theme-accent hover:underline">
                    "Create one"
                </A>
            </div>
        </form>
    }
}
