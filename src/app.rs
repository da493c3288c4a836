//! Application state and initialization
//!
//! This module wires the session store into the services and makes them
//! available to the embedding view layer through AppState.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::{ClientsService, QuotesService};
use crate::store::{seed, SessionStore};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub quotes: QuotesService,
    pub clients: ClientsService,
}

impl AppState {
    /// Build the state around an existing store (seeded or empty)
    pub fn new(store: SessionStore) -> Self {
        tracing::info!("Initializing application state");

        Self {
            quotes: QuotesService::new(store.clone()),
            clients: ClientsService::new(store.clone()),
            store,
        }
    }

    /// State booted from the fixed demo snapshot
    pub fn seeded() -> Self {
        Self::new(seed::seeded_store())
    }
}

/// Install the global tracing subscriber.
///
/// Called once by the embedding shell at startup; the core itself only
/// emits events. Filtering honours `RUST_LOG` with a sensible default.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simplynu_admin=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Logging initialized");
}
