// Server module - Router assembly and listener binding
// Used by main.rs and by the integration tests

use axum::Router;
use axum::http::HeaderValue;
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::AppState;

/// Build the full application router
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    api::api_router(state)
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// An empty origin list allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let mut parsed = Vec::new();
        for origin in origins {
            match origin.parse::<HeaderValue>() {
                Ok(v) => parsed.push(v),
                Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
            }
        }
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind exactly `host:port`. A busy port surfaces as `AddrInUse`.
pub async fn bind(host: IpAddr, port: u16) -> Result<tokio::net::TcpListener, std::io::Error> {
    tokio::net::TcpListener::bind(SocketAddr::new(host, port)).await
}

/// Bind the listener and serve until the process is stopped
pub async fn serve(app: Router, host: IpAddr, port: u16) -> Result<SocketAddr, std::io::Error> {
    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Persona gateway listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(addr)
}
