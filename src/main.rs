//! Manual test client: run one extraction from the command line and print
//! the downstream payload JSON.
//!
//! Usage: candidex "<question context>" "<transcript>" [candidate-uuid]

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use candidex::{config, CandidatePayload, ExtractionEngine};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (context, transcript) = match args.as_slice() {
        [context, transcript] | [context, transcript, _] => (context, transcript),
        _ => {
            eprintln!("usage: candidex \"<question context>\" \"<transcript>\" [candidate-uuid]");
            return ExitCode::FAILURE;
        }
    };
    let candidate_id = match args.get(2) {
        Some(raw) => match raw.parse::<Uuid>() {
            Ok(id) => id,
            Err(e) => {
                eprintln!("invalid candidate uuid {raw:?}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Uuid::new_v4(),
    };

    tracing::info!("{} v{} extracting", config::APP_NAME, config::APP_VERSION);

    let engine = ExtractionEngine::new();
    let attributes = engine.extract(transcript, context);
    let payload = CandidatePayload::new(candidate_id, transcript.clone(), attributes);

    match serde_json::to_string_pretty(&payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize payload: {e}");
            ExitCode::FAILURE
        }
    }
}
