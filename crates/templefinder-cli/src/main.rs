mod commands;

use clap::{Parser, Subcommand};
use templefinder_search::{InMemoryFacilityRepository, SearchRequest, SortOrder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "templefinder-cli")]
#[command(about = "Find temples near a zip code or coordinate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for temples within a radius of a zip code or coordinate
    Search {
        /// US zip code, 5 digits or ZIP+4
        #[arg(long, conflicts_with_all = ["lat", "lng"])]
        zip: Option<String>,
        /// Latitude of the search origin
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude of the search origin
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
        /// Search radius in miles (defaults to the configured radius)
        #[arg(long)]
        radius: Option<f64>,
        /// Result ordering: distance, name or state
        #[arg(long, default_value_t = SortOrder::Distance)]
        sort: SortOrder,
    },
    /// List every temple in the dataset
    List,
    /// Show one temple by id
    Show { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = templefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let records = templefinder_core::load_facilities(&config.facilities_path)?;
    let repository = InMemoryFacilityRepository::from_records(records);

    match cli.command {
        Commands::Search {
            zip,
            lat,
            lng,
            radius,
            sort,
        } => {
            let request = SearchRequest {
                zipcode: zip,
                latitude: lat,
                longitude: lng,
                radius,
            };
            commands::run_search(&config, repository, request, sort).await?;
        }
        Commands::List => commands::run_list(&repository)?,
        Commands::Show { id } => commands::run_show(&repository, id)?,
    }

    Ok(())
}
