use api::ProbeRow;
use dioxus::prelude::*;

/// Runs the database connectivity probe and shows the raw rows.
#[component]
pub fn DatabaseProbeView() -> Element {
    let probe = use_resource(move || async move { api::test_connection().await });

    rsx! {
        div {
            class: "probe",
            h1 { "Database Connection Test" }
            match &*probe.read() {
                None => rsx! {
                    p { class: "probe-pending", "Connecting..." }
                },
                Some(Ok(rows)) => rsx! {
                    pre { "{render_rows(rows)}" }
                },
                Some(Err(e)) => rsx! {
                    p { class: "probe-error", "Connection failed: {e}" }
                },
            }
        }
    }
}

/// Pretty-printed JSON for the probe's row set.
pub fn render_rows(rows: &[ProbeRow]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|e| format!("<unprintable rows: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows_pretty_prints() {
        let text = render_rows(&[ProbeRow { test: 1 }]);
        assert_eq!(text, "[\n  {\n    \"test\": 1\n  }\n]");
    }

    #[test]
    fn test_render_empty_row_set() {
        assert_eq!(render_rows(&[]), "[]");
    }
}
