use clap::Parser;
use github_analytics::cli::Cli;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = github_analytics::run(Cli::parse()).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
