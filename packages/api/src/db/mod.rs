//! # Database module — the PostgreSQL handle behind the connectivity probe
//!
//! Gated behind `#[cfg(feature = "server")]` so client (WASM) builds never
//! pull in SQLx or Tokio networking code.
//!
//! ## Design
//!
//! [`Database`] is constructed once by the server entry point from a
//! [`DatabaseConfig`](crate::config::DatabaseConfig) and handed to server
//! functions through an `axum::Extension`. There is no process-wide
//! singleton: whoever starts the server owns the handle, and cloning it only
//! clones the pool's reference count.
//!
//! ## Re-exports
//!
//! - [`Database`] — pooled client with [`connect`](Database::connect) and
//!   [`probe`](Database::probe).

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{Database, PROBE_QUERY};
