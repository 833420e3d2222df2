use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The advisory components are pure functions over const tables, so the only
/// thing worth sharing here is the configuration itself.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
