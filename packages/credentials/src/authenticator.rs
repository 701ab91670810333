//! Authentication capability used by the form, and its in-memory demo
//! implementation.

use std::future::Future;
use std::time::Duration;

use crate::error::AuthError;

/// Async capability that decides whether credentials are accepted.
pub trait Authenticator {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), AuthError>>;
    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), AuthError>>;
}

/// Async capability that suspends the submission for the simulated delay.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Accepts exactly one email/password pair and every sign-up.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoAuthenticator {
    email: String,
    password: String,
}

impl DemoAuthenticator {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Authenticator for DemoAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email == self.email && password == self.password {
            Ok(())
        } else {
            Err(AuthError::Rejected)
        }
    }

    // Sign-up is simulated; nothing is stored.
    async fn sign_up(&self, _name: &str, _email: &str, _password: &str) -> Result<(), AuthError> {
        Ok(())
    }
}
