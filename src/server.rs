//! Server setup with Tower middleware.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::ServerConfig;
use crate::logging::SERVICE;
use crate::routes;

/// Create the axum application with middleware.
///
/// Handlers are stateless, so the router carries no shared state; the only
/// process-wide collaborator is the tracing dispatcher.
pub fn create_app() -> Router {
    routes::create_router()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Fails if the address cannot be bound or the accept loop errors out.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_app();
    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr).await?;
    info!(service = SERVICE, "calculator service listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
