//! Auth endpoints
//!
//! - POST /auth/register - Register a new user (JSON)
//! - POST /auth/token - Password-grant login (form encoded)
//! - GET /auth/users/me/ - Current user

use super::{ApiClient, ApiError, Method, Transport};
use crate::core::models::{Credentials, RegisterUser, Token, User};

/// Auth operations of an [`ApiClient`]
pub struct AuthApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthApi<'a, T> {
    pub(super) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Register a new user; the backend answers with the username
    pub async fn register(&self, user: &RegisterUser) -> Result<(), ApiError> {
        let request = self.client.request(Method::Post, "/auth/register").json(user)?;
        self.client.execute(request).await
    }

    /// Exchange username and password for an access token
    pub async fn login(&self, username: &str, password: &str) -> Result<Token, ApiError> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self
            .client
            .request(Method::Post, "/auth/token")
            .form(&credentials)?;
        self.client.fetch(request).await
    }

    /// The user the current token belongs to
    pub async fn me(&self) -> Result<User, ApiError> {
        self.client
            .fetch(self.client.request(Method::Get, "/auth/users/me/"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::core::api::mock::{MockTransport, client};
    use crate::core::api::{FORM_CONTENT_TYPE, Method, RequestBody};
    use crate::core::models::RegisterUser;

    #[tokio::test]
    async fn test_login_sends_form_encoded_credentials() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"access_token": "t0k3n", "token_type": "bearer"}"#);
        let api = client(&transport);

        let token = api.auth().login("a", "b").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8000/auth/token");
        assert_eq!(request.body, RequestBody::Form("username=a&password=b".to_string()));
        assert_eq!(request.header_value("Content-Type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(token.access_token, "t0k3n");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let transport = MockTransport::new();
        transport.respond(401, r#"{"detail": "Incorrect username or password"}"#);
        let api = client(&transport);

        let err = api.auth().login("a", "wrong").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "Incorrect username or password");
    }

    #[tokio::test]
    async fn test_register_posts_json() {
        let transport = MockTransport::new();
        transport.respond(200, r#""alice""#);
        let api = client(&transport);

        api.auth()
            .register(&RegisterUser {
                username: "alice".to_string(),
                password: "secret".to_string(),
                email: None,
            })
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/auth/register");
        match request.body {
            RequestBody::Json(body) => {
                assert_eq!(body["username"], "alice");
                assert!(body.get("email").is_none());
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_me_uses_token() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"username": "alice", "email": "a@example.com"}"#);
        let api = client(&transport).with_token(Some("t0k3n".to_string()));

        let user = api.auth().me().await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.path(), "/auth/users/me/");
        assert_eq!(request.header_value("authorization"), Some("Bearer t0k3n"));
        assert_eq!(user.email.as_deref(), Some("a@example.com"));
    }
}
