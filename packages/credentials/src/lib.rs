//! Credential form controller for the TourGuide sign-in screen.
//!
//! Platform independent: no UI framework, no runtime. The UI crate drives
//! [`FormState`] and supplies the [`Timer`]; the [`Authenticator`] decides
//! whether credentials are accepted.

pub mod authenticator;
pub mod config;
pub mod error;
pub mod form;

pub use authenticator::{Authenticator, DemoAuthenticator, Timer};
pub use config::FormConfig;
pub use error::{AuthError, FormError};
pub use form::{Field, FormState, Mode, Notice, SubmitOutcome, Submission};
