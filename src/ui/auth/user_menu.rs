//! User menu component
//!
//! Header widget showing the signed-in user with a sign-out action,
//! or the sign-in and sign-up links when nobody is signed in.

use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_session;
use crate::core::User;
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = use_session();
    let menu_open = RwSignal::new(false);

    // Pages that need a session redirect on their own
    let handle_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    view! {
        <div class="relative">
            {move || match session.user() {
                None => view! {
                    <div class="flex items-center gap-2">
                        <A
                            href="/login"
                            attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                        >
                            "Sign In"
                        </A>
                        <A href="/register" attr:class="btn-primary text-sm">
                            "Sign Up"
                        </A>
                    </div>
                }.into_any(),
                Some(user) => {
                    view! {
                        <div class="relative">
                            <button
                                class="flex items-center gap-2 p-1 rounded-lg hover:bg-theme-secondary transition-colors"
                                on:click=move |_| menu_open.update(|v| *v = !*v)
                            >
                                <UserAvatar user=user.clone() />
                                <span class="hidden sm:block text-sm font-medium text-theme-primary max-w-[120px] truncate">
                                    {user.username.clone()}
                                </span>
                            </button>

                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 mt-2 w-56 card py-1 z-50">
                                    <div class="px-4 py-3 divider-bottom">
                                        <p class="text-sm font-medium text-theme-primary truncate">
                                            {user.username.clone()}
                                        </p>
                                        {user.email.clone().map(|email| view! {
                                            <p class="text-xs text-theme-muted truncate">{email}</p>
                                        })}
                                    </div>
                                    <button
                                        class="w-full px-4 py-2 text-sm text-left text-red-500 hover:bg-red-50 transition-colors flex items-center gap-2"
                                        on:click=handle_logout
                                    >
                                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                                        "Sign Out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Round badge with the user's initials
#[component]
pub fn UserAvatar(user: User) -> impl IntoView {
    let label = initials(&user.username);

    view! {
        <div
            class="w-8 h-8 rounded-full bg-theme-accent text-white flex items-center justify-center text-sm font-semibold"
            title=user.username.clone()
        >
            {label}
        </div>
    }
}

/// Up to two leading characters of a name, uppercased
fn initials(name: &str) -> String {
    name.trim().chars().take(2).flat_map(char::to_uppercase).collect()
}
