use crate::api;
use crate::cli::commands::ServeArgs;
use crate::cli::session::load_config;
use crate::config::ServerConfig;
use crate::errors::FlightRiskError;
use crate::reporting::renderer;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), FlightRiskError> {
    let config = load_config(args.config.as_deref()).await?;
    let defaults = ServerConfig::default();
    let file = config.server.clone().unwrap_or_default();

    let host = args
        .host
        .clone()
        .or(file.host)
        .or(defaults.host)
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = args.port.or(file.port).or(defaults.port).unwrap_or(8080);
    info!(host = %host, port, "Starting API server");

    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("{}", renderer::render_version());
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| FlightRiskError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
