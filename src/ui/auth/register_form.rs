//! Register form component
//!
//! Creates an account, then signs in with it right away.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::use_session;
use crate::core::RegisterUser;
use crate::core::validation::validate_registration;
use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::icon::{Icon, icons};

/// Register form component
#[component]
pub fn RegisterForm(
    /// Callback when registration and the following sign-in succeed
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let input_error = RwSignal::new(None::<String>);

    let error = Signal::derive(move || input_error.get().or_else(|| session.error.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.clear_error();

        let username_val = username.get().trim().to_string();
        let password_val = password.get();
        if let Err(message) =
            validate_registration(&username_val, &password_val, &confirm_password.get())
        {
            input_error.set(Some(message));
            return;
        }
        input_error.set(None);

        let email_val = email.get().trim().to_string();
        let user = RegisterUser {
            username: username_val,
            password: password_val,
            email: (!email_val.is_empty()).then_some(email_val),
        };

        spawn_local(async move {
            if session.register(user).await.is_ok() {
                if let Some(callback) = on_success {
                    callback.run(());
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Create Account"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Start keeping track of your exams"
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
                label="Email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
            />
            <FormField
                label="Password"
                required=true
                input_type="password"
                autocomplete="new-password"
                value=password
            />
            <FormField
                label="Confirm Password"
                required=true
                input_type="password"
                autocomplete="new-password"
                value=confirm_password
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
                                "Creating account..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Create Account"</span> }.into_any()
                    }
                }}
            </button>

            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <A href="/login" attr:class="font-medium text-theme-accent hover:underline">
                    "Sign in"
                </A>
            </div>
        </form>
    }
}
