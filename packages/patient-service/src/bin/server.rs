//! Patient service binary.
//!
//! In-memory CRUD HTTP service for clinic patients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin karte-patient-service -- --port 3001
//! ```

use clap::Parser;

use karte_core::logger::setup_logger;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "karte-patient-service", about = "Patient service for Karte")]
struct Args {
    /// Port to listen on (falls back to the PORT environment variable)
    #[arg(short, long, default_value_t = default_port())]
    port: u16,
}

/// Default listening port: the PORT environment variable, then 3000.
fn default_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = karte_patient_service::run_server(args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
