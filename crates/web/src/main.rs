//! Trolley Storefront

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use leptos::{prelude::*, task::spawn_local};
use tracing::{Level, warn};

use trolley::{
    catalog::{CatalogClient, CatalogState},
    config::{Config, ConfigError},
    session::Session,
};

mod cart;
mod catalog;
mod dispatch;
mod telemetry;

use dispatch::Dispatcher;

/// Outcome of the catalog read together with how long it took.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CatalogLoad {
    /// Loader state shown by the catalog view.
    state: CatalogState,

    /// Time from request to resolution, once resolved.
    elapsed: Option<Duration>,
}

async fn load_catalog(client: CatalogClient) -> CatalogLoad {
    #[cfg(target_arch = "wasm32")]
    let load_started_at = monotonic_now();

    #[cfg(not(target_arch = "wasm32"))]
    let load_started_at = Instant::now();

    let result = client.fetch_products().await;

    #[cfg(target_arch = "wasm32")]
    let load_elapsed = elapsed_since(load_started_at);

    #[cfg(not(target_arch = "wasm32"))]
    let load_elapsed = load_started_at.elapsed();

    if let Err(error) = &result {
        warn!(%error, endpoint = client.endpoint(), "catalog load failed");
    }

    CatalogLoad {
        state: CatalogState::from(result),
        elapsed: Some(load_elapsed),
    }
}

#[cfg(target_arch = "wasm32")]
fn monotonic_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn elapsed_since(start_ms: f64) -> Duration {
    let elapsed_ms = (monotonic_now() - start_ms).max(0.0);

    Duration::from_secs_f64(elapsed_ms / 1_000.0)
}

/// Main storefront shell.
#[component]
fn App(config: Config) -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let live_message = RwSignal::new((0_u64, String::new()));
    let catalog = RwSignal::new(CatalogLoad::default());

    let dispatcher = Dispatcher::new(session, live_message, config.currency);

    let client = CatalogClient::new(&config);

    spawn_local(async move {
        catalog.set(load_catalog(client).await);
    });

    view! {
        <main class="storefront">
            <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                {move || live_message.get().1}
            </p>
            <header class="storefront-header">
                <h1 class="storefront-title">"Trolley"</h1>
                <cart::CartToggle dispatcher=dispatcher />
            </header>
            <cart::CartPanel dispatcher=dispatcher />
            {move || {
                let load = catalog.get();

                view! {
                    <catalog::CatalogView
                        state=load.state
                        elapsed=load.elapsed
                        dispatcher=dispatcher
                    />
                }
            }}
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = build_config(option_env!("RUST_LOG"));

    telemetry::init(&config);

    if let Some(error) = config_error {
        warn!(%error, "ignoring build-time log level");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

/// Configuration for this build. A `RUST_LOG` level set at compile time wins
/// over the build-profile default.
fn build_config(log_level_name: Option<&str>) -> (Config, Option<ConfigError>) {
    let config = if cfg!(debug_assertions) {
        Config::default().with_log_level(Level::DEBUG)
    } else {
        Config::default()
    };

    match log_level_name.map(|name| config.clone().with_log_level_name(name)) {
        Some(Ok(configured)) => (configured, None),
        Some(Err(error)) => (config, Some(error)),
        None => (config, None),
    }
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
