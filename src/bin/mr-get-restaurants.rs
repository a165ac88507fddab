use clap::Parser;
use mr_fump::{client::EndpointConfig, Client, HttpConfigBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'l', long)]
    restaurants_endpoint: Option<String>,
    #[arg(long, help = "Skip TLS certificate verification")]
    insecure: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("MENURU_LOG"))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let http_config = HttpConfigBuilder::default()
        .accept_invalid_certs(args.insecure)
        .build()?;
    let endpoints = EndpointConfig {
        menu: None,
        restaurants: args.restaurants_endpoint,
    };
    let client = Client::from_config(&http_config, Some(endpoints))?;
    let restaurants = client.get_restaurants().await?;
    println!("{}", serde_json::to_string(&restaurants)?);
    Ok(())
}
