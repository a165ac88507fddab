use std::{future::Future, time::Duration};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::ProgressBar;
use mr_fump::{
    client::EndpointConfig, constants::DEFAULT_TIMEOUT_SECS, format_meal, format_meal_annotated,
    Client, HttpConfigBuilder, Meal, MealType, MenuQuery, Restaurant,
};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "menuru", about = "FUMP university restaurant menus")]
struct CliArgs {
    // `interactive` when omitted
    #[command(subcommand)]
    pub subcommand: Option<Command>,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(short = 'b', long, global = true, help = "Base URL of the menu service")]
    pub base_url: Option<String>,

    #[arg(
        short = 't',
        long,
        global = true,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long, global = true, help = "Skip TLS certificate verification")]
    pub insecure: bool,

    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    #[clap(name = "restaurants", about = "List the available restaurants")]
    Restaurants {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    #[clap(name = "menu", about = "Show one meal of a restaurant's menu")]
    Menu {
        #[command(flatten)]
        menu_opts: MenuOpts,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,

        #[arg(long, help = "Tag sauces and vegan, vegetarian or seafood main dishes")]
        annotate: bool,
    },

    #[clap(name = "interactive", about = "Pick restaurant, date and meal at prompts")]
    Interactive,
}

#[derive(Args, Debug, PartialEq)]
struct MenuOpts {
    #[arg(short = 'r', long = "restaurant", help = "Restaurant ID")]
    pub restaurant_id: i32,

    #[arg(short = 'd', long, help = "Date as YYYY-MM-DD, defaults to today")]
    pub date: Option<NaiveDate>,

    #[arg(short = 'm', long, default_value = "lunch", help = "lunch/almoço or dinner/jantar")]
    pub meal: MealType,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.global_opts.verbose, args.global_opts.quiet)?;
    let client = build_client(&args.global_opts)?;
    let show_progress = !args.global_opts.quiet;

    match args.subcommand.unwrap_or(Command::Interactive) {
        Command::Restaurants { json } => {
            let restaurants =
                with_spinner(show_progress, "Fetching restaurants", client.get_restaurants())
                    .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&restaurants)?);
            } else {
                print_restaurants(restaurants.iter());
            }
        }
        Command::Menu {
            menu_opts,
            json,
            annotate,
        } => {
            let query = MenuQuery::new(
                menu_opts.restaurant_id,
                menu_opts.date.unwrap_or_else(today),
                menu_opts.meal,
            );
            if json {
                let meal =
                    with_spinner(show_progress, "Fetching menu", client.get_meal(&query)).await?;
                let output = if annotate {
                    annotated_json(meal.as_ref())
                } else {
                    serde_json::to_value(&meal)?
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let meal =
                    with_spinner(show_progress, "Fetching menu", client.fetch_meal(&query)).await;
                if annotate {
                    println!("{}", format_meal_annotated(meal.as_ref()));
                } else {
                    println!("{}", format_meal(meal.as_ref()));
                }
            }
        }
        Command::Interactive => interactive(&client, show_progress).await?,
    }

    Ok(())
}

async fn interactive(client: &Client, show_progress: bool) -> Result<()> {
    let restaurants =
        with_spinner(show_progress, "Fetching restaurants", client.list_restaurants()).await;
    if restaurants.is_empty() {
        println!("Could not fetch the restaurant list.");
        return Ok(());
    }

    println!("\nAvailable restaurants:");
    print_restaurants(restaurants.iter());
    println!();

    let theme = ColorfulTheme::default();
    let restaurant_id: i32 = Input::with_theme(&theme)
        .with_prompt("Restaurant ID")
        .interact_text()?;
    if !restaurants.iter().any(|restaurant| restaurant.id == restaurant_id) {
        tracing::warn!(restaurant_id, "restaurant is not in the listed restaurants");
    }
    let date: NaiveDate = Input::with_theme(&theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today())
        .interact_text()?;
    let meal_index = Select::with_theme(&theme)
        .with_prompt("Meal")
        .items(&MealType::ALL)
        .default(0)
        .interact()?;

    let query = MenuQuery::new(restaurant_id, date, MealType::ALL[meal_index]);
    let meal = with_spinner(show_progress, "Fetching menu", client.fetch_meal(&query)).await;
    println!("\nMenu:");
    println!("{}", format_meal(meal.as_ref()));
    Ok(())
}

/// The meal as JSON with a `kind` on every dish.
fn annotated_json(meal: Option<&Meal>) -> Value {
    let Some(meal) = meal else {
        return Value::Null;
    };
    let dishes: Vec<Value> = meal
        .dishes
        .iter()
        .map(|dish| {
            json!({
                "category": dish.category,
                "description": dish.description,
                "kind": dish.kind(),
            })
        })
        .collect();
    json!({ "meal_type": meal.meal_type, "dishes": dishes })
}

fn print_restaurants<'a>(restaurants: impl Iterator<Item = &'a Restaurant>) {
    for restaurant in restaurants {
        println!("{} - {}", restaurant.id, restaurant.name);
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn with_spinner<F: Future>(show: bool, message: &'static str, future: F) -> F::Output {
    let spinner = if show {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let output = future.await;
    spinner.finish_and_clear();
    output
}

fn build_client(opts: &GlobalOpts) -> Result<Client> {
    let http_config = HttpConfigBuilder::default()
        .timeout(Duration::from_secs(opts.timeout))
        .accept_invalid_certs(opts.insecure)
        .build()?;
    let endpoints = opts.base_url.as_deref().map(EndpointConfig::from_base_url);
    Client::from_config(&http_config, endpoints).context("failed to set up the menu client")
}

fn init_tracing(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MENURU_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}
