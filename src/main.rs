use anyhow::Result;
use clap::Parser;
use palabra_quiz::ai::{OpenAiChatClient, OpenAiImageClient};
use palabra_quiz::models::Config;
use palabra_quiz::quiz::QuizOrchestrator;
use palabra_quiz::server;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "palabra-quiz")]
#[command(about = "Spanish vocabulary quiz service")]
struct CliArgs {
    /// Override the configured bind address (host:port).
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palabra_quiz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting palabra-quiz");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Reuse one HTTP connection pool across provider clients.
    let http_client = reqwest::Client::new();

    let chat = OpenAiChatClient::new_with_client(
        config.chat_api_key.clone(),
        config.chat_api_base.clone(),
        config.chat_model.clone(),
        http_client.clone(),
    );
    let image = OpenAiImageClient::new_with_client(
        config.image_api_key.clone(),
        config.image_api_base.clone(),
        config.image_model.clone(),
        http_client,
    );

    let orchestrator = Arc::new(QuizOrchestrator::new(Box::new(chat), Box::new(image)));
    let app = server::router(orchestrator, server::cors_layer(&config.cors_allow_origins));

    let bind_addr = args.bind.unwrap_or(config.bind_addr);
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    info!("Listening on {}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
