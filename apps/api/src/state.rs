use reqwest::Client;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no credentials of its own: handlers resolve keys per request and
/// build the orchestrators from the result.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pooled HTTP client shared by both provider clients.
    pub http: Client,
}
