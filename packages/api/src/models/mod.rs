//! Data models for the application.

mod probe;

pub use probe::ProbeRow;
