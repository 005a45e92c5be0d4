// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config and logging, then run the requested place flow

use anyhow::bail;
use dotenv::dotenv;
use placepicker::config::Config;
use placepicker::errors::PlacesError;
use placepicker::services::{AvailablePlaces, ConfiguredPosition, PlacesClient, PlacesView};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info"
        };
        env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting placepicker client...");
    log::info!("Environment: {}", config.environment);
    log::info!("Places API: {}", config.api_base_url);

    let client = PlacesClient::from_config(&config);
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("nearby") => nearby(client, &config).await,
        Some("saved") => saved(&client).await,
        Some("save") => save(&client, args.get(2)).await,
        Some("remove") => remove(&client, args.get(2)).await,
        Some(other) => {
            bail!("Unknown action: {} (expected nearby, saved, save or remove)", other)
        }
    }
}

/// Fetch available places and print them ordered by proximity
/// DOCUMENTATION: Runs the full orchestrator lifecycle, printing the view
/// at each state transition the way a UI would re-render it
async fn nearby(client: PlacesClient, config: &Config) -> anyhow::Result<()> {
    let positions = ConfiguredPosition::from_config(config);
    let mut screen = AvailablePlaces::new(client, positions);

    if screen.on_mount() {
        print_view(&screen.render());
        screen.load().await;
    }
    print_view(&screen.render());

    Ok(())
}

/// Print the user's saved places
async fn saved(client: &PlacesClient) -> anyhow::Result<()> {
    let places = client.fetch_user_places().await?;

    if places.is_empty() {
        println!("No places saved yet.");
        return Ok(());
    }

    println!("Saved Places");
    for place in &places {
        println!("  {} ({})", place.name, place.address);
    }

    Ok(())
}

/// Save an available place to the user's list
/// DOCUMENTATION: The freshly picked place goes to the front of the saved
/// list; picking an already-saved place is a no-op
async fn save(client: &PlacesClient, id: Option<&String>) -> anyhow::Result<()> {
    let Some(id) = id else {
        bail!("Usage: placepicker save <place-id>");
    };

    let available = client.fetch_available_places().await?;
    let place = available
        .into_iter()
        .find(|p| p.id == *id)
        .ok_or_else(|| PlacesError::NotFound(id.clone()))?;

    let mut places = client.fetch_user_places().await?;
    if places.iter().any(|p| p.id == place.id) {
        println!("{} is already saved.", place.name);
        return Ok(());
    }

    log::info!("Saving place {} ({})", place.id, place.name);
    places.insert(0, place);

    let message = client.update_user_places(&places).await?;
    println!("{}", message);

    Ok(())
}

/// Remove a place from the user's list
async fn remove(client: &PlacesClient, id: Option<&String>) -> anyhow::Result<()> {
    let Some(id) = id else {
        bail!("Usage: placepicker remove <place-id>");
    };

    let mut places = client.fetch_user_places().await?;
    let before = places.len();
    places.retain(|p| p.id != *id);

    if places.len() == before {
        println!("No saved place with id {}.", id);
        return Ok(());
    }

    log::info!("Removing place {}", id);

    let message = client.update_user_places(&places).await?;
    println!("{}", message);

    Ok(())
}

/// Render a view to stdout
fn print_view(view: &PlacesView<'_>) {
    match view {
        PlacesView::Loading { text } => println!("{}", text),
        PlacesView::Error { title, message } => {
            println!("{}", title);
            println!("{}", message);
        }
        PlacesView::Fallback { text } => println!("{}", text),
        PlacesView::List { title, places } => {
            println!("{}", title);
            for place in *places {
                println!("  {} ({})", place.name, place.address);
            }
        }
    }
}
