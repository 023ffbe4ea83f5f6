//! `moim`: open one screen against the live API and print its first settled state.
//!
//! Handy for poking at the backend without a UI. Configuration comes from the
//! same environment variables as the app (`MOIM_API_BASE_URL`,
//! `MOIM_ACCESS_TOKEN`, ...), optionally via a `.env` file.

use clap::{Parser, Subcommand};
use moim_app::feature::{
    calendar, home, meeting_detail, participant_list, plan_detail, profile_update,
};
use moim_app::view::{Feature, ParticipantSource, Screen};
use moim_app::{AppConfig, AppContainer};
use moim_core::LoadResult;
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "moim", version, about = "Inspect MoimTable screens from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Joined meetings and upcoming plans.
    Home,
    /// Plans and reviews of the current month.
    Calendar,
    /// The signed-in user's profile form.
    Profile,
    /// A meeting with its plans and reviews.
    Meeting { meeting_id: String },
    /// A plan, or a review with `--review`, together with its comments.
    Post {
        post_id: String,
        #[arg(long)]
        review: bool,
    },
    /// Participants of a meeting, plan or review.
    Participants {
        id: String,
        #[arg(long, default_value = "meeting", value_parser = ["meeting", "plan", "review"])]
        of: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- Environment ---
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moim=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // --- Container ---
    let config = AppConfig::from_env()?;
    tracing::debug!(base_url = %config.network.base_url, "Loaded configuration");
    let container = AppContainer::new(config)?;

    // --- Screen ---
    match cli.command {
        Commands::Home => print_settled(home::open(&container)).await,
        Commands::Calendar => print_settled(calendar::open(&container)).await,
        Commands::Profile => print_settled(profile_update::open(&container)).await,
        Commands::Meeting { meeting_id } => {
            print_settled(meeting_detail::open(&container, &meeting_id)).await
        }
        Commands::Post { post_id, review } => {
            print_settled(plan_detail::open(&container, &post_id, !review)).await
        }
        Commands::Participants { id, of } => {
            let source = match of.as_str() {
                "plan" => ParticipantSource::Plan { plan_id: id },
                "review" => ParticipantSource::Review { review_id: id },
                _ => ParticipantSource::Meeting { meeting_id: id },
            };
            print_settled(participant_list::open(&container, source)).await
        }
    }
}

/// Wait until the screen leaves `Loading`, print the state as JSON and close it.
async fn print_settled<F>(screen: Screen<F>) -> anyhow::Result<()>
where
    F: Feature,
    F::Content: Serialize,
{
    let mut rx = screen.watch();
    let state = rx.wait_for(|state| !state.is_loading()).await?.clone();
    screen.close().await;

    println!("{}", serde_json::to_string_pretty(&state)?);

    match state {
        LoadResult::Error(err) => Err(err.into()),
        _ => Ok(()),
    }
}
