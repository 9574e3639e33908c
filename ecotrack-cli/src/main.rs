use clap::{Parser, Subcommand, ValueEnum};
use ecotrack_cli::{CliError, OfflineClassifier, Result, StaticClassifier};
use ecotrack_core::{
    Activity, Classification, ContentLibrary, EcoSession, FuelType, ImagePayload, Ownership,
    SessionEvent, TransportMode, TripActivity,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ecotrack")]
#[command(
    version,
    about = "Ecotrack - carbon footprint estimation and rewards engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a trip and commit it against the daily footprint
    Trip {
        /// Distance in kilometres
        #[arg(short, long)]
        distance: f64,

        /// Means of transport
        #[arg(short, long, value_enum)]
        mode: ModeArg,

        /// Private or shared vehicle (car trips only)
        #[arg(short, long, value_enum, default_value = "private")]
        ownership: OwnershipArg,

        /// Fuel type (car trips only)
        #[arg(short, long, value_enum)]
        fuel: Option<FuelArg>,
    },

    /// Run a scanned item through the (simulated) classification service
    Scan {
        /// Material label the simulated service should report
        #[arg(short, long, default_value = "Plastic Bottle")]
        material: String,

        /// Report the item as recyclable
        #[arg(short, long)]
        recyclable: bool,

        /// Points the simulated service should award
        #[arg(short, long, default_value_t = 10)]
        points: u32,

        /// Disposal instructions for display
        #[arg(short, long, default_value = "Check your local recycling rules")]
        instructions: String,

        /// Captured image to send (contents are opaque to the engine)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Simulate a classification service outage
        #[arg(long)]
        fail: bool,
    },

    /// Complete a quest from the catalog
    Quest {
        /// Quest id (see `ecotrack status`)
        quest_id: String,
    },

    /// Submit a full quiz round (answer indices in question order)
    Quiz {
        #[arg(value_delimiter = ',')]
        answers: Vec<u32>,
    },

    /// Show the session baseline, quest catalog and educational content
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
}

impl From<ModeArg> for TransportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Car => TransportMode::Car,
            ModeArg::Bus => TransportMode::Bus,
            ModeArg::Train => TransportMode::Train,
            ModeArg::Bike => TransportMode::Bike,
            ModeArg::Walk => TransportMode::Walk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OwnershipArg {
    Private,
    Shared,
}

impl From<OwnershipArg> for Ownership {
    fn from(ownership: OwnershipArg) -> Self {
        match ownership {
            OwnershipArg::Private => Ownership::Private,
            OwnershipArg::Shared => Ownership::Shared,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FuelArg {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl From<FuelArg> for FuelType {
    fn from(fuel: FuelArg) -> Self {
        match fuel {
            FuelArg::Petrol => FuelType::Petrol,
            FuelArg::Diesel => FuelType::Diesel,
            FuelArg::Electric => FuelType::Electric,
            FuelArg::Hybrid => FuelType::Hybrid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut session = EcoSession::with_defaults();

    let event = match cli.command {
        Commands::Trip {
            distance,
            mode,
            ownership,
            fuel,
        } => {
            let mut trip =
                TripActivity::new(distance, mode.into()).with_ownership(ownership.into());
            if let Some(fuel) = fuel {
                trip = trip.with_fuel(fuel.into());
            }
            session.log_activity(Activity::Trip(trip))
        }

        Commands::Scan {
            material,
            recyclable,
            points,
            instructions,
            image,
            fail,
        } => {
            let payload = match image {
                Some(path) => ImagePayload::new(std::fs::read(path)?),
                None => ImagePayload::new(Vec::new()),
            };

            if fail {
                session.scan_item(&OfflineClassifier, &payload).await
            } else {
                let classifier = StaticClassifier::new(
                    Classification::new(material, recyclable, points)
                        .with_instructions(instructions),
                );
                session.scan_item(&classifier, &payload).await
            }
        }

        Commands::Quest { quest_id } => session.log_activity(Activity::Quest { quest_id }),

        Commands::Quiz { answers } => session.log_activity(Activity::Quiz { answers }),

        Commands::Status => {
            print_status(&session)?;
            return Ok(());
        }
    };

    report(&session, event)
}

/// Print the outcome and the post-commit snapshot; rejected commands become
/// a non-zero exit
fn report(session: &EcoSession, event: SessionEvent) -> Result<()> {
    if let SessionEvent::CommandFailed { reason, .. } = &event {
        return Err(CliError::Rejected(reason.clone()));
    }

    println!("{}", serde_json::to_string_pretty(&event)?);
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);

    Ok(())
}

fn print_status(session: &EcoSession) -> Result<()> {
    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!("available quests:");
    for quest in session.quests().iter() {
        info!(
            "  {} - {} (+{} pts, {} {})",
            quest.id, quest.title, quest.points, quest.target, quest.unit
        );
    }

    let library = ContentLibrary::standard();
    info!("articles:");
    for article in library.articles() {
        info!("  [{}] {} ({})", article.category, article.title, article.read_time);
    }
    info!("videos:");
    for video in library.videos() {
        info!("  {} ({})", video.title, video.duration);
    }

    Ok(())
}
