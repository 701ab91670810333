use dioxus::prelude::*;

use credentials::FormConfig;
use ui::NotificationProvider;
use views::{AboutUs, ContactUs, Home, Landing, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/landing")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/aboutus")]
    AboutUs {},
    #[route("/contactus")]
    ContactUs {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const TOURGUIDE_TOML: &str = include_str!("../tourguide.toml");

/// Credential screen settings bundled with the app.
pub(crate) fn form_config() -> FormConfig {
    FormConfig::from_toml(TOURGUIDE_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", FormConfig::filename(), e);
        FormConfig::default()
    })
}

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use api::config::DatabaseConfig;
    use api::db::Database;
    use axum::Extension;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The one database handle for the process, shared with server functions.
    let database = Database::connect(&DatabaseConfig::from_env()?).await?;

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(Extension(database));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NotificationProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = FormConfig::from_toml(TOURGUIDE_TOML).unwrap();
        assert_eq!(config, form_config());
        assert_eq!(config.demo.email, "demo@example.com");
        assert_eq!(config.submit.delay_ms, 1500);
    }
}
