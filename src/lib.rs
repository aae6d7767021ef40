pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod terminal;

use std::sync::Arc;

use axum::Router;

use config::Config;
use services::provider::ProviderError;
use state::AppState;

/// The complete HTTP application for `config`, ready to be served locally or
/// handed to an external host.
pub fn build_app(config: &Config) -> Result<Router, ProviderError> {
    let state = Arc::new(AppState::from_config(config)?);
    Ok(routes::create_router(&config.public_dir, &config.index_file).with_state(state))
}
