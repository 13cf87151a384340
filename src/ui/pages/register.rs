//! Register page component

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::layout::PageLayout;
use crate::ui::auth::{RegisterForm, use_session};

/// Account creation page; the new account is signed in right away
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();

    Effect::new(move |_| {
        if session.is_authenticated() {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    view! {
        <PageLayout>
            <div class="flex items-center justify-center p-4 pt-16">
                <div class="w-full max-w-md card p-8">
                    <RegisterForm />
                </div>
            </div>
        </PageLayout>
    }
}
