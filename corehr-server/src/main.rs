use corehr_server::{Config, Server, ServerState, init_logger, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();
    init_logger();

    print_banner();
    tracing::info!("CoreHR server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize state (opens the store, seeds the first-run admin)
    let state = ServerState::initialize(&config)?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
