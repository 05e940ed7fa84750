/**
 * PCB Inspect Server Entry Point
 *
 * Loads configuration, initializes tracing and serves the Axum app until
 * Ctrl-C or SIGTERM.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use pcb_inspect::backend::server::{config, create_app, shutdown_signal};

    let app_config = config::load_config()?;
    config::init_tracing(&app_config);
    config::log_summary(&app_config);

    let addr = app_config.bind_address();
    let app = create_app(app_config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin pcb-inspect-server --features ssr");
    std::process::exit(1);
}
