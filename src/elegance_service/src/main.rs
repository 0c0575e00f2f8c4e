use color_eyre::eyre::Result;
use elegance_adapters::config::ServiceSettings;
use elegance_service::{EleganceService, helpers::build_app_state, tracing::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ServiceSettings::load()?;
    tracing::info!(
        backend = ?settings.storage.backend,
        cart_update_strategy = ?settings.cart.update_strategy,
        "Starting elegance service"
    );

    let state = build_app_state(&settings).await?;
    let listener = tokio::net::TcpListener::bind(settings.server.address()).await?;

    EleganceService::new(state)
        .run(
            listener,
            &settings.server.base_path(),
            settings.server.allowed_origins(),
        )
        .await?;

    Ok(())
}
