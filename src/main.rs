use nature_identifier::{routes, AppState, Config, GeminiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load();
    let state = AppState {
        gemini: GeminiClient::new(&config),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, model = %config.model_name, "nature identifier listening");

    axum::serve(listener, app).await?;
    Ok(())
}
