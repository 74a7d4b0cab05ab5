use directory_server::{Server, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging) and configuration
    let config = setup_environment()?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        store = ?config.store_backend,
        "Directory server starting..."
    );

    // 2. Serve (opens the record store on startup)
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
