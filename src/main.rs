use crate::config::Config;
use crate::db::connection::{check_dataset, Database};
use astra::Server;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod search;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    init_logging();
    let config = Config::parse();

    // The dataset is provisioned externally; refuse to start without it.
    let db = Database::new(config.db_path.clone());
    match check_dataset(&db) {
        Ok(records) => {
            tracing::info!(path = %config.db_path.display(), records, "dataset ready");
        }
        Err(e) => {
            tracing::error!(error = %e, "dataset check failed");
            return ExitCode::FAILURE;
        }
    }

    let addr = config.addr();
    tracing::info!(%addr, workers = config.workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.workers);
    let result = server.serve(move |req, _info| router::respond(req, &db));

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        return ExitCode::FAILURE;
    }

    tracing::info!("server shut down cleanly");
    ExitCode::SUCCESS
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
