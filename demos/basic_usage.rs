//! Basic facade usage example
//!
//! Demonstrates named loggers, parameterized messages, and throwable
//! handling over the bundled console sink.
//!
//! Run with: cargo run --example basic_usage

use rust_logging_facade::prelude::*;
use rust_logging_facade::{debug, info, warn};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("simulated disk failure")]
struct DiskFailure;

fn main() -> Result<()> {
    println!("=== Rust Logging Facade - Basic Usage Example ===\n");

    // Wire the facade to the console sink and install it process-wide.
    ServiceProvider::initialize(Arc::new(ConsoleSink::new())).install()?;
    let provider = ServiceProvider::global().expect("provider installed");

    println!("1. Named loggers at different levels:");
    let server = provider.logger(Some("server"));
    server.trace("accepting connections");
    server.debug("worker pool sized");
    server.info("startup complete");
    server.warn("config file missing, using defaults");
    server.error("health check failed");

    println!("\n2. Parameterized messages:");
    let client = provider.logger(Some("client"));
    info!(client, "connected to {} on port {}", "localhost", 8080);
    debug!(client, "handshake took {} ms", 12);
    warn!(client, "latency {} ms above threshold {}", 350, 200);

    println!("\n3. Throwable handling:");
    let storage = provider.logger(Some("storage"));
    storage.error_err("flush failed", DiskFailure);
    storage.error_fmt(
        "flush of {} failed",
        vec![LogArg::value("segment-7"), LogArg::error(DiskFailure)],
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
