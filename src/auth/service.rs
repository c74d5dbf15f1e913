use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::api::AuthApi;
use crate::errors::{ServiceResult, ValidationError};
use crate::types::User;
use crate::validation::{Validate, ValidationBuilder};

use super::context::{Session, SessionHandle};

const PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationBuilder::new("email", Some(&self.email))
            .required()
            .email()
            .validate()?;
        ValidationBuilder::new("password", Some(&self.password))
            .required()
            .min_length(PASSWORD_MIN_LENGTH)
            .validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl Validate for Registration {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationBuilder::new("username", Some(&self.username))
            .required()
            .min_length(2)
            .max_length(50)
            .validate()?;
        ValidationBuilder::new("email", Some(&self.email))
            .required()
            .email()
            .validate()?;
        ValidationBuilder::new("password", Some(&self.password))
            .required()
            .min_length(PASSWORD_MIN_LENGTH)
            .validate()
    }
}

/// Body of a successful login or register call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Drives sign-in, sign-up and sign-out, keeping the shared session in step
/// with the server.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    session: SessionHandle,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>, session: SessionHandle) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, credentials: &Credentials) -> ServiceResult<User> {
        credentials.validate()?;
        let response = self.api.login(credentials).await?;
        self.session.establish(Session {
            token: response.token,
            user: response.user.clone(),
        });
        Ok(response.user)
    }

    pub async fn register(&self, registration: &Registration) -> ServiceResult<User> {
        registration.validate()?;
        let response = self.api.register(registration).await?;
        self.session.establish(Session {
            token: response.token,
            user: response.user.clone(),
        });
        Ok(response.user)
    }

    /// Signs out locally even when the server call fails; the token is gone
    /// either way.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            warn!("Logout request failed, clearing session anyway: {}", e);
        }
        self.session.clear();
    }

    /// Re-validate the stored token against the server. Clears the session on
    /// an auth failure so the caller lands back on the sign-in page.
    pub async fn current_user(&self) -> ServiceResult<User> {
        match self.api.current_user().await {
            Ok(user) => Ok(user),
            Err(e) => {
                if e.is_unauthorized() {
                    self.session.clear();
                }
                Err(e)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::errors::ServiceError;

    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: Some("Asha".to_string()),
        }
    }

    struct HappyApi;

    #[async_trait]
    impl AuthApi for HappyApi {
        async fn login(&self, _credentials: &Credentials) -> ServiceResult<AuthResponse> {
            Ok(AuthResponse { token: "tok-1".to_string(), user: user(), message: None })
        }

        async fn register(&self, _registration: &Registration) -> ServiceResult<AuthResponse> {
            Ok(AuthResponse { token: "tok-2".to_string(), user: user(), message: None })
        }

        async fn logout(&self) -> ServiceResult<()> {
            Ok(())
        }

        async fn current_user(&self) -> ServiceResult<User> {
            Ok(user())
        }
    }

    struct ExpiredApi;

    #[async_trait]
    impl AuthApi for ExpiredApi {
        async fn login(&self, _credentials: &Credentials) -> ServiceResult<AuthResponse> {
            Err(ServiceError::Authentication("bad credentials".to_string()))
        }

        async fn register(&self, _registration: &Registration) -> ServiceResult<AuthResponse> {
            Err(ServiceError::Authentication("taken".to_string()))
        }

        async fn logout(&self) -> ServiceResult<()> {
            Err(ServiceError::Network("offline".to_string()))
        }

        async fn current_user(&self) -> ServiceResult<User> {
            Err(ServiceError::SessionExpired)
        }
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let session = SessionHandle::new();
        let service = AuthService::new(Arc::new(HappyApi), session.clone());
        let creds = Credentials { email: "a@b.com".to_string(), password: "secret1".to_string() };

        let user = service.login(&creds).await.unwrap();
        assert_eq!(user.id, "u1");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_login_rejects_invalid_input_before_network() {
        let service = AuthService::new(Arc::new(ExpiredApi), SessionHandle::new());
        let creds = Credentials { email: "not-an-email".to_string(), password: "secret1".to_string() };

        let err = service.login(&creds).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let service = AuthService::new(Arc::new(HappyApi), SessionHandle::new());
        let creds = Credentials { email: "a@b.com".to_string(), password: "abc".to_string() };
        assert!(service.login(&creds).await.is_err());
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_server_fails() {
        let session = SessionHandle::new();
        session.establish(Session { token: "tok".to_string(), user: user() });
        let service = AuthService::new(Arc::new(ExpiredApi), session.clone());

        service.logout().await;
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_on_check() {
        let session = SessionHandle::new();
        session.establish(Session { token: "stale".to_string(), user: user() });
        let service = AuthService::new(Arc::new(ExpiredApi), session.clone());

        let err = service.current_user().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_establishes_session() {
        let session = SessionHandle::new();
        let service = AuthService::new(Arc::new(HappyApi), session.clone());
        let reg = Registration {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
            username: "asha".to_string(),
        };

        service.register(&reg).await.unwrap();
        assert_eq!(session.token().as_deref(), Some("tok-2"));
    }
}
