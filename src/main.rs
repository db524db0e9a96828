use crate::config::AppConfig;
use crate::data::DatasetCache;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use log::{error, info, warn};

mod analysis;
mod charts;
mod config;
mod dashboard;
mod data;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Warm the dataset cache; a failure here is retried on the first request
    let state = AppState::new(DatasetCache::new(config.data_source()));
    match state.cache.get_or_load() {
        Ok(snapshot) if snapshot.table.is_empty() => {
            warn!("Dataset loaded but no listing survived the rent filter")
        }
        Ok(_) => {}
        Err(e) => warn!("Initial dataset load failed: {e}"),
    }

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
