use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use drape::client::{ApiClient, SessionStore, UploadOutcome, choices};
use std::path::PathBuf;

/// Upload a clothing image and print the outfit suggestion.
#[derive(Parser, Debug)]
#[command(name = "drape-client")]
struct Args {
    /// Path to the clothing image (JPG or PNG)
    image: PathBuf,

    /// Intake service base URL
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    backend_url: String,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::OCCASIONS))]
    occasion: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::SEASONS))]
    season: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::GENDERS))]
    gender: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::BODY_TYPES))]
    body_type: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::AGE_GROUPS))]
    age: Option<String>,

    #[arg(long, value_parser = PossibleValuesParser::new(choices::MOODS))]
    mood: Option<String>,

    /// Remember these preferences for the next run
    #[arg(long)]
    remember: bool,

    /// Where session preferences are stored
    #[arg(long, default_value = "drape-session.json")]
    session_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut store = SessionStore::open(&args.session_file);
    let mut prefs = store.preferences();

    if let Some(occasion) = args.occasion {
        prefs.occasion = occasion;
    }
    if let Some(season) = args.season {
        prefs.season = season;
    }
    if let Some(gender) = args.gender {
        prefs.gender = gender;
    }
    if let Some(body_type) = args.body_type {
        prefs.body_type = body_type;
    }
    if let Some(age) = args.age {
        prefs.age = age;
    }
    if let Some(mood) = args.mood {
        prefs.mood = mood;
    }

    let image_bytes = tokio::fs::read(&args.image)
        .await
        .with_context(|| format!("Failed to read image file: {}", args.image.display()))?;

    let client = ApiClient::new(&args.backend_url)?;

    match client.upload(image_bytes, &prefs).await {
        Ok(outcome) => {
            if args.remember {
                store.remember(&prefs)?;
            }
            match outcome {
                UploadOutcome::Suggestion(markdown) => println!("{}", markdown),
                UploadOutcome::NoSuggestion => {
                    eprintln!("No suggestion returned. Try a different image or filters.")
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
