//! Session state: who is signed in and with which token

use crate::core::api::{ApiClient, ApiError, Transport};
use crate::core::models::{Token, User};

/// The signed-in user and their access token, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<Token>,
}

impl Session {
    /// Session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User, token: Token) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.access_token.as_str())
    }

    /// Forget user and token
    pub fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// Client carrying this session's token
    pub fn authorize<T: Transport>(&self, client: ApiClient<T>) -> ApiClient<T> {
        client.with_token(self.access_token().map(str::to_string))
    }
}

/// Log in and resolve the signed-in user.
///
/// If the backend cannot report the user, the entered username is used.
pub async fn login<T: Transport + Clone>(
    client: &ApiClient<T>,
    username: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let token = client.auth().login(username, password).await?;

    let authorized = client
        .clone()
        .with_token(Some(token.access_token.clone()));
    let user = authorized
        .auth()
        .me()
        .await
        .unwrap_or_else(|_| User::named(username));

    Ok(Session::signed_in(user, token))
}
