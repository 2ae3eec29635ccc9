//! Notes Module Service — in-memory notes REST API.
//!
//! Serves list/get/create/update/delete over `/notes` plus a `/status`
//! endpoint. State lives for the life of the process only.
//!
//! Default: http://127.0.0.1:3000/

mod config;
mod request_log;
mod routes;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use store::NoteStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let store = if config.seed {
        NoteStore::seeded()
    } else {
        NoteStore::new()
    };
    log::info!(
        "[NOTES] Store ready with {} notes (next id {})",
        store.len(),
        store.next_id()
    );

    let state = Arc::new(AppState::new(store));
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    log::info!("Notes Module Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
