//! Demo authenticator - one fixed account and a simulated round trip.

use std::time::Duration;

use async_trait::async_trait;

use quill_core::domain::User;
use quill_core::ports::{AuthError, Authenticator};

use crate::seed;

/// Delay applied to every login and register call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// The only email/password pair that logs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "demo@example.com".to_string(),
            password: "password".to_string(),
        }
    }
}

/// Authenticator standing in for a remote account service.
///
/// Login accepts only [`DemoCredentials`] and yields the demo user.
/// Registration accepts anything and yields the demo profile renamed to the
/// given name and email; no uniqueness or format checks happen here.
pub struct DemoAuthenticator {
    credentials: DemoCredentials,
    account: User,
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self {
            credentials: DemoCredentials::default(),
            account: seed::demo_user(),
            latency,
        }
    }

    pub fn with_credentials(mut self, credentials: DemoCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.round_trip().await;

        if email == self.credentials.email && password == self.credentials.password {
            Ok(self.account.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> Result<User, AuthError> {
        self.round_trip().await;

        Ok(User {
            name: name.to_string(),
            email: email.to_string(),
            ..self.account.clone()
        })
    }
}
