//! # Connectivity probe rows
//!
//! [`ProbeRow`] is one row of the probe query (`SELECT 1 AS test`). On the
//! server it derives [`sqlx::FromRow`] so it decodes straight from the query;
//! everywhere it is `Serialize + Deserialize` so the row set can cross the
//! server/client boundary through a Dioxus server function.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;

/// One row returned by the connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(FromRow))]
pub struct ProbeRow {
    pub test: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_render_as_json_array() {
        let rows = vec![ProbeRow { test: 1 }];
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(json, r#"[{"test":1}]"#);
    }
}
