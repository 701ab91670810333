//! # Credential screen configuration — `tourguide.toml`
//!
//! Controls the two knobs of the credential screen that a deployment may want
//! to change without touching code: how long the simulated submission waits,
//! and which account the demo authenticator accepts.
//!
//! ## Structure
//!
//! ```toml
//! [submit]
//! delay_ms = 1500
//!
//! [demo]
//! email = "demo@example.com"
//! password = "password"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FormConfig`] | Top-level config. TOML (de)serialisation, the canonical filename, and helpers that build the delay and the authenticator. |
//! | [`SubmitConfig`] | Submission section — `delay_ms` with a default of **1500 ms**. |
//! | [`DemoConfig`] | Demo account section — the single email/password pair accepted at sign-in. |
//!
//! Every struct implements `Default`, so a missing or empty file is the
//! default configuration and a partial file only overrides what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::authenticator::DemoAuthenticator;

/// Top-level configuration stored in `tourguide.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub submit: SubmitConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Simulated submission settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Milliseconds the submission waits before resolving.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

/// The one account the demo authenticator accepts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_demo_email")]
    pub email: String,
    #[serde(default = "default_demo_password")]
    pub password: String,
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_demo_email() -> String {
    "demo@example.com".to_string()
}

fn default_demo_password() -> String {
    "password".to_string()
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            email: default_demo_email(),
            password: default_demo_password(),
        }
    }
}

impl FormConfig {
    /// Builder method to set the submission delay.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.submit.delay_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tourguide.toml"
    }

    /// How long a submission waits before it resolves.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit.delay_ms)
    }

    /// Demo authenticator for the configured account.
    pub fn authenticator(&self) -> DemoAuthenticator {
        DemoAuthenticator::new(self.demo.email.clone(), self.demo.password.clone())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
