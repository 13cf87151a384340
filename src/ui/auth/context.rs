//! Session context for the component tree
//!
//! This module provides a reactive session context that:
//! - Holds the signed-in user and access token for the browser session
//! - Hands out API clients carrying that token
//! - Drives the login, registration and logout flows
//!
//! Nothing is persisted; a full reload starts anonymous again.

use leptos::logging::log;
use leptos::prelude::*;

use crate::core::api::{ApiClient, PlatformTransport};
use crate::core::config::ApiConfig;
use crate::core::session::{self, Session};
use crate::core::{RegisterUser, User};

/// Session context providing the current user and auth actions
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session
    pub session: RwSignal<Session>,
    /// Loading state for auth operations
    pub loading: RwSignal<bool>,
    /// Error message from last auth operation
    pub error: RwSignal<Option<String>>,
    config: StoredValue<ApiConfig>,
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// Backend client authorized with the current token.
    /// Reads untracked since it is called from event handlers and tasks.
    pub fn client(&self) -> ApiClient<PlatformTransport> {
        let client = ApiClient::platform(self.config.get_value());
        self.session.with_untracked(|s| s.authorize(client))
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// End the session
    pub fn logout(&self) {
        self.session.update(Session::sign_out);
        log!("Signed out");
    }

    /// Log in with username and password.
    ///
    /// On failure the message is also stored in `error`.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        let result = session::login(&self.client(), username, password)
            .await
            .map_err(|e| e.message());

        self.loading.set(false);
        match result {
            Ok(session) => {
                log!("Signed in as {}", username);
                self.session.set(session);
                Ok(())
            }
            Err(message) => {
                self.error.set(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Register a new account and sign in with it
    pub async fn register(&self, user: RegisterUser) -> Result<(), String> {
        self.loading.set(true);
        self.error.set(None);

        let registered = self
            .client()
            .auth()
            .register(&user)
            .await
            .map_err(|e| e.message());

        if let Err(message) = registered {
            self.loading.set(false);
            self.error.set(Some(message.clone()));
            return Err(message);
        }

        log!("Registered {}", user.username);
        self.login(&user.username, &user.password).await
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context(config: ApiConfig) -> SessionContext {
    let ctx = SessionContext {
        session: RwSignal::new(Session::anonymous()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None::<String>),
        config: StoredValue::new(config),
    };

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
