use astra::Server;
use log::{error, info};
use loupan_viewer::config::read_config;
use loupan_viewer::loader::load_store;
use loupan_viewer::logger::setup_logger;
use loupan_viewer::responses::error_to_response;
use loupan_viewer::router::{handle, App};
use std::net::SocketAddr;

fn main() {
    // 1️⃣ Configuration and logging
    let config = match read_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_logger(config.log_level_filter()) {
        eprintln!("❌ Logger setup failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Load the listings document once. Failure leaves an empty store.
    let app = App {
        store: load_store(&config.data_source),
        title: config.page_title.clone(),
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match config.bind_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {}: {e}", config.bind_address);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
