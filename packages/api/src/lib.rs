//! # API crate — server functions for the TourGuide web app
//!
//! Defines the Dioxus server functions the frontend calls, along with the
//! server-only modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | `server` | `DatabaseConfig` read from `DATABASE_URL` / `DB_MAX_CONNECTIONS` |
//! | [`db`] | — | Explicitly constructed PostgreSQL handle ([`db::Database`]) and the probe query |
//! | [`error`] | `server` | `ApiError`, mapped into `ServerFnError` at the function boundary |
//! | [`models`] | — | `ProbeRow`, the serialisable probe result |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! once with the server logic (behind `#[cfg(feature = "server")]`) and once
//! as a thin client stub that forwards the call over HTTP.
//!
//! - **Database**: `test_connection`

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod config;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use models::ProbeRow;

/// Run the connectivity probe against the server's database handle.
#[cfg(feature = "server")]
#[get("/api/db/probe", database: axum::Extension<db::Database>)]
pub async fn test_connection() -> Result<Vec<ProbeRow>, ServerFnError> {
    match database.probe().await {
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), "database probe succeeded");
            Ok(rows)
        }
        Err(e) => {
            tracing::error!("Database probe failed: {}", e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/db/probe")]
pub async fn test_connection() -> Result<Vec<ProbeRow>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
