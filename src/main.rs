use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persona_gateway::infrastructure::{AppState, GeminiClient};
use persona_gateway::{api_docs, config, server};

/// Log every model the key can use with `generateContent`
async fn log_available_models(client: &GeminiClient) {
    match client.list_models().await {
        Ok(models) => {
            for model in models.iter().filter(|m| m.supports_generate_content()) {
                tracing::info!("Available model: {}", model.name);
            }
        }
        Err(e) => tracing::warn!("Failed to list models: {}", e),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persona_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--openapi") {
        match api_docs::openapi_json() {
            Ok(doc) => println!("{}", doc),
            Err(e) => {
                tracing::error!("Failed to render OpenAPI document: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load configuration
    dotenvy::dotenv().ok();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Loaded configuration: {:?}", config);

    let gemini = GeminiClient::from_config(&config);
    tracing::info!("Using model {}", gemini.model());

    if args.iter().any(|arg| arg == "--list-models") {
        log_available_models(&gemini).await;
    }

    let state = AppState::new(Arc::new(gemini));
    let app = server::build_router(state, &config.cors_allowed_origins);

    if let Err(e) = server::serve(app, config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
