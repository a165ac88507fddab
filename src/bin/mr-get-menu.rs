use chrono::{Local, NaiveDate};
use clap::Parser;
use mr_fump::{client::EndpointConfig, Client, HttpConfigBuilder, MealType, MenuQuery};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'r', long = "restaurant", help = "Restaurant ID")]
    restaurant_id: i32,
    #[arg(short = 'd', long, help = "Date as YYYY-MM-DD. Defaults to today.")]
    date: Option<NaiveDate>,
    #[arg(short = 'm', long, default_value = "lunch")]
    meal: MealType,
    #[arg(
        short = 'e',
        long,
        help = "Endpoint to retrieve the menu from. Defaults to the FUMP service."
    )]
    menu_endpoint: Option<String>,
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
        menu: args.menu_endpoint,
        restaurants: None,
    };
    let client = Client::from_config(&http_config, Some(endpoints))?;
    let query = MenuQuery::new(
        args.restaurant_id,
        args.date.unwrap_or_else(|| Local::now().date_naive()),
        args.meal,
    );
    let meal = client.get_meal(&query).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "query": query, "meal": meal }))?
    );
    Ok(())
}
