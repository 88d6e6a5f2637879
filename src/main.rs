use crate::catalog::{CatalogState, CatalogStore};
use crate::config::CatalogConfig;
use crate::fetcher::{spawn_fetches, HttpCatalogSource};
use crate::router::{handle, App};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod config;
mod domain;
mod errors;
mod fetcher;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() {
    let config = CatalogConfig::from_env();
    init_tracing(config.log_json);

    // 1️⃣ Empty session, both collections pending
    let store = Arc::new(CatalogStore::new(CatalogState::new(config.initial_criteria())));

    // 2️⃣ Fetch both collections in the background
    let source = match HttpCatalogSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "catalog source setup failed");
            std::process::exit(1);
        }
    };
    info!(
        communities = %source.communities_url(),
        homes = %source.homes_url(),
        "fetching catalog"
    );
    spawn_fetches(&store, Arc::new(source));

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    info!(%addr, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App {
        store: Arc::clone(&store),
        config,
    };

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    // Late fetch results have nowhere to go now.
    store.teardown();
    info!("server shut down cleanly");
}
