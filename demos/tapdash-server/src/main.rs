//! Standalone Tapdash server binary.
//!
//! Binds the address given in `TAPDASH_ADDR` (default `0.0.0.0:8080`) and
//! serves the tap-race protocol until terminated. Log verbosity follows
//! `RUST_LOG`, e.g. `RUST_LOG=tapdash=debug`.

use tapdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("TAPDASH_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!(%addr, "starting tapdash server");

    let server = TapdashServer::builder().bind(&addr).build().await?;
    server.run().await?;
    Ok(())
}
