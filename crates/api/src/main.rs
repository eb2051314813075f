use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rentacar_observability::init();

    let config = rentacar_api::config::ApiConfig::from_env()?;
    let registry = rentacar_api::bootstrap::load_registry(&config)?;
    let app = rentacar_api::app::build_app(registry);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
