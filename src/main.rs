use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::db::import::import_properties_csv;
use crate::db::properties;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();
    let cfg = AppConfig::from_env();

    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        log::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    // Seed once, on first run against an empty table.
    match db.with_conn(|conn| properties::count(conn)) {
        Ok(0) => {
            if let Err(e) = import_properties_csv(&db, &cfg.seed_path) {
                log::error!("seed import failed: {e}");
                std::process::exit(1);
            }
        }
        Ok(n) => log::info!("properties table holds {n} rows, seed skipped"),
        Err(e) => {
            log::error!("could not inspect properties table: {e}");
            std::process::exit(1);
        }
    }

    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("invalid bind address {:?}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };
    log::info!("starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db, &cfg) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
    }
}
