//! Login page component
//!
//! A standalone page for signing in, leads to the exam overview on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::layout::PageLayout;
use crate::ui::auth::{LoginForm, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    // Signed-in users have nothing to do here
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
                    <LoginForm />
                </div>
            </div>
        </PageLayout>
    }
}
