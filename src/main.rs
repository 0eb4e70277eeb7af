use crate::api::HttpListingClient;
use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::view::{SessionStore, Storefront};
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod view;


fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    let api = match HttpListingClient::new(&config.backend_url, config.fetch_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Listing client init failed: {e}");
            std::process::exit(1);
        }
    };

    let app = Storefront::new(
        api,
        SessionStore::new(config.max_sessions),
        config.scene_url.clone(),
    );

    info!(
        addr = %config.addr,
        backend = %config.backend_url,
        workers = config.workers,
        "Starting storefront at http://{}",
        config.addr
    );

    let server = Server::bind(config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(status = err.status(), "{err}");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

/// `RUST_LOG` picks the filter; everything at info and above otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
