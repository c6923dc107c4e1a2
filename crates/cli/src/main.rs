use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use catalog::{find_movie, summarize, MovieRating, VoteStore};
use sentiment::{Classifier, Sentiment, SentimentModel};
use server::{ReviewForm, ReviewOrchestrator, ServerConfig};

/// Movie Votes - review sentiment voting
#[derive(Parser)]
#[command(name = "movie-votes")]
#[command(about = "Classify movie reviews and tally them as votes", long_about = None)]
struct Cli {
    /// Path to the JSON vote store (overrides MOVIE_VOTES_FILE)
    #[arg(long, global = true)]
    votes_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host address to bind (overrides MOVIE_VOTES_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides MOVIE_VOTES_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show the rating summary of every movie
    Ratings,

    /// Print the predicted sentiment of each review
    Classify {
        /// Review texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Classify one review and record it as a vote
    Vote {
        /// Exact movie title
        #[arg(long)]
        movie: String,

        /// Review text
        #[arg(long)]
        review: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::from_env();
    if let Some(votes_file) = cli.votes_file {
        config.votes_file = votes_file;
    }
    server::init_tracing(&config.log_level);

    match cli.command {
        Commands::Serve { host, port } => handle_serve(config, host, port).await?,
        Commands::Ratings => handle_ratings(&config)?,
        Commands::Classify { texts } => handle_classify(&texts)?,
        Commands::Vote { movie, review } => handle_vote(&config, &movie, &review).await?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!("Starting movie votes server");
    server::start_server(config).await
}

/// Handle the 'ratings' command
fn handle_ratings(config: &ServerConfig) -> Result<()> {
    let store = VoteStore::new(&config.votes_file);
    let ledger = store
        .load()
        .with_context(|| format!("Failed to load votes from {}", store.path().display()))?;

    print_ratings(&summarize(&ledger));
    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(texts: &[String]) -> Result<()> {
    let start = Instant::now();
    let model = train_model()?;
    info!("Trained model in {:?}", start.elapsed());

    for text in texts {
        let sentiment = model.classify(text);
        println!("{} {}", colored_label(sentiment), text);
    }
    Ok(())
}

/// Handle the 'vote' command
async fn handle_vote(config: &ServerConfig, title: &str, review: &str) -> Result<()> {
    let Some(movie) = find_movie(title) else {
        bail!("Unknown movie '{}'", title);
    };
    let form = ReviewForm {
        custom_review: Some(review.to_string()),
        suggestion: None,
    };
    if form.review_text().is_none() {
        bail!("Review text cannot be empty");
    }

    let model = train_model()?;
    let orchestrator =
        ReviewOrchestrator::new(Arc::new(model), VoteStore::new(&config.votes_file));
    let page = orchestrator.submit_review(movie, &form).await?;

    if let Some(sentiment) = page.prediction {
        println!("{} {}", "Prediction:".bold(), colored_label(sentiment));
    }
    println!(
        "{} now has {} votes: {:.2} stars, {:.1}% positive",
        movie.title.bold(),
        page.rating.votes,
        page.rating.stars,
        page.rating.percent_positive
    );
    Ok(())
}

fn train_model() -> Result<SentimentModel> {
    SentimentModel::train_default().context("Failed to train sentiment model")
}

fn colored_label(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.label().green(),
        Sentiment::Negative => sentiment.label().red(),
    }
}

/// Print one line per movie in catalog order
fn print_ratings(ratings: &[MovieRating]) {
    println!("{}", "Movie Ratings:".bold().blue());
    for (rank, rating) in ratings.iter().enumerate() {
        let summary = &rating.summary;
        println!(
            "{}. {:<20} {:>5.2} stars {:>6.1}% positive ({} votes)",
            (rank + 1).to_string().green(),
            rating.title,
            summary.stars,
            summary.percent_positive,
            summary.votes
        );
    }
}
