//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use super::layout::PageLayout;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageLayout>
            <div class="flex flex-col items-center justify-center p-4 pt-24 text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-theme-primary mb-2">"Page Not Found"</h2>
                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-primary">"Back to my exams"</A>
            </div>
        </PageLayout>
    }
}
