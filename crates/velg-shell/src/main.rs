//! Command-line shell for the Velgarien platform.
//!
//! Wires the session store, the API client and the notification bus the
//! same way the browser does, loads the multiverse index and prints it.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (`velg.yaml`, then `VELG_*` overrides)
//! 2. Initialize structured logging (tracing)
//! 3. Build the session store and seed the access token
//! 4. Build the API client and the UI bus with its error handler
//! 5. Load simulations and connections concurrently
//! 6. Report failures through the error handler, print the listing

mod config;
mod error;
mod listing;

use tokio::sync::broadcast::Receiver;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use velg_client::{ApiClient, AppState};
use velg_format::FormatterContext;
use velg_schemas::{Filter, Pagination};
use velg_ui::{ErrorHandler, UiBus, UiEvent};

use crate::config::{LogFormat, ShellConfig};
use crate::error::ShellError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the client cannot be
/// built, or the simulation index cannot be loaded.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ShellConfig::load()?;
    init_logging(config.log_format);

    info!(
        api_url = config.client.base_url,
        locale = config.locale,
        authenticated = config.access_token.is_some(),
        "velg-shell starting"
    );

    run(&config).await?;
    Ok(())
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

async fn run(config: &ShellConfig) -> Result<(), ShellError> {
    let state = AppState::new();
    state.set_access_token(config.access_token.clone());

    let client = ApiClient::new(config.client.clone(), state.clone())?;
    let bus = UiBus::new();
    let mut events = bus.subscribe();
    let errors = ErrorHandler::new(bus);
    let fmt = FormatterContext::from_tag(&config.locale);

    state.set_loading(true);
    let simulations_api = client.simulations();
    let connections_api = client.connections();
    let filter = Filter::default();
    let (simulations, connections) = tokio::join!(
        simulations_api.list(Pagination::default(), &filter),
        connections_api.list_all(),
    );
    state.set_loading(false);

    let connections = connections.unwrap_or_else(|err| {
        errors.handle_api_error(&err);
        Vec::new()
    });
    let page = match simulations {
        Ok(page) => page,
        Err(err) => {
            errors.handle_api_error(&err);
            report(&mut events);
            return Err(ShellError::Load(err));
        }
    };

    info!(
        simulations = page.data.len(),
        total = page.meta.total,
        connections = connections.len(),
        "multiverse loaded"
    );
    print!(
        "{}",
        listing::render(&page.data, page.meta.total, &connections, fmt)
    );
    state.set_simulations(page.data);
    report(&mut events);
    Ok(())
}

/// Print whatever the error handler published.
fn report(events: &mut Receiver<UiEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            UiEvent::Toast(toast) => eprintln!("[{:?}] {}", toast.kind, toast.message),
            UiEvent::Navigate(route) => {
                warn!(
                    route = route.as_str(),
                    "navigation requested; log in and set VELG_ACCESS_TOKEN"
                );
            }
        }
    }
}
