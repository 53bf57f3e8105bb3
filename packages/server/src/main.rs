#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Traffic flow API server binary.
//!
//! Configured through `BIND_ADDR`, `PORT`, `FORECAST_SEED` and
//! `FORECAST_MAX_HOURS`; logging through `RUST_LOG`.

use traffic_flow_server::{ServerConfig, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    run_server(ServerConfig::from_env()).await
}
