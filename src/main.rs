//! Options-page navigation demo.
//!
//! Builds the route table (or loads one from a TOML file), navigates to the
//! given locations in order and prints what each navigation renders.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use options_router::config::load_routes;
use options_router::pages;
use options_router::routing::Router;
use options_router::Navigator;

#[derive(Parser, Debug)]
#[command(name = "options-router", about = "Navigate the options-page route table")]
struct Args {
    /// Load the route table from a TOML file instead of the built-in one.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Print rendered trees as JSON.
    #[arg(long)]
    json: bool,

    /// Locations to navigate to, in order. Defaults to `/`.
    locations: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "options_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let routes = match &args.routes {
        Some(path) => {
            tracing::info!(path = ?path, "loading route table from file");
            load_routes(path, &pages::registry())?
        }
        None => pages::routes(),
    };

    let router = match Router::new(routes) {
        Ok(router) => router,
        Err(errors) => {
            for error in &errors {
                tracing::error!(error = %error, "invalid route table");
            }
            std::process::exit(1);
        }
    };

    tracing::info!(routes = router.len(), "route table compiled");

    let navigator = Navigator::new(Arc::new(router));

    let locations = if args.locations.is_empty() {
        vec!["/".to_string()]
    } else {
        args.locations
    };

    for location in &locations {
        match navigator.push(location).await {
            Ok(rendered) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&rendered)?);
                } else {
                    print!("{location}:\n{rendered}");
                }
            }
            Err(error) => {
                tracing::error!(location = %location, error = %error, "navigation failed");
            }
        }
    }

    Ok(())
}
