use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(args::Args::parse());

    let state = http_server::state(Arc::clone(&args)).await?;
    let router = http_server::router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
