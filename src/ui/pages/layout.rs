//! Header and frame shared by every page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::UserMenu;

/// Page frame with the app header on top
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="divider-bottom">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                            <div class="w-8 h-8 bg-theme-accent rounded-lg flex items-center justify-center text-white font-bold">
                                "E"
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"Exam Tracker"</span>
                        </A>
                        <UserMenu />
                    </div>
                </div>
            </header>

            <main class="flex-1">
                {children()}
            </main>
        </div>
    }
}
