use std::path::PathBuf;

use clap::Parser;
use opine::state::{AppState, Store};
use opine::{intent, models};

/// Seeds a store from document files, replays an action log through it and
/// prints the final state as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Survey list document (JSON array of nested surveys)
    #[arg(long, env)]
    surveys: Option<PathBuf>,

    /// Single survey document whose questions/options seed the editor slices
    #[arg(long, env)]
    survey: Option<PathBuf>,

    /// Raw response documents (JSON array)
    #[arg(long, env)]
    responses: Option<PathBuf>,

    /// Aggregate documents (JSON array)
    #[arg(long, env)]
    aggregates: Option<PathBuf>,

    /// Action log to replay, one JSON action per line
    #[arg(long, env)]
    actions: Option<PathBuf>,

    /// Pretty-print the final state
    #[arg(long)]
    pretty: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "opine=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut store = Store::new(AppState::default());

    if let Some(path) = &args.surveys {
        let docs = models::surveys_from_json(&std::fs::read_to_string(path)?)?;
        store.dispatch(&intent::load_surveys(&docs));
    }
    if let Some(path) = &args.survey {
        let doc = models::survey_from_json(&std::fs::read_to_string(path)?)?;
        store.dispatch(&intent::open_survey(&doc));
    }
    if let Some(path) = &args.responses {
        let docs = models::answers_from_json(&std::fs::read_to_string(path)?)?;
        store.dispatch(&intent::load_responses(&docs));
    }
    if let Some(path) = &args.aggregates {
        let docs = models::answers_from_json(&std::fs::read_to_string(path)?)?;
        store.dispatch(&intent::load_aggregates(&docs));
    }

    if let Some(path) = &args.actions {
        for (idx, line) in std::fs::read_to_string(path)?.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match intent::parse_action(line) {
                Ok(action) => {
                    store.dispatch(&action);
                }
                Err(err) => {
                    tracing::warn!(line = idx + 1, %err, "skipping unrecognized action");
                }
            }
        }
    }

    let state = store.state();
    let out = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{out}");

    Ok(())
}
