use clap::Parser;
use dotenv::dotenv;
use server::{config::Config, http};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();

    // spin up API
    http::serve(config).await?;

    Ok(())
}
