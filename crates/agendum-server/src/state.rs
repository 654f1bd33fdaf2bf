//! Application state for the HTTP server.

use std::sync::Arc;

use agendum_core::config::DefaultsConfig;
use agendum_core::AgendaGenerator;

/// Shared application state passed to all handlers.
///
/// The scheduler itself is a pure function and needs no state; only the
/// generator client and request defaults are shared.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<AgendaGenerator>,
    pub defaults: Arc<DefaultsConfig>,
}

impl AppState {
    pub fn new(generator: AgendaGenerator, defaults: DefaultsConfig) -> Self {
        Self {
            generator: Arc::new(generator),
            defaults: Arc::new(defaults),
        }
    }
}
