#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # docmark
//! ## Introduction
//!
//! A document autograder for instructors: point it at an assignment's
//! submission folder and it compares each student document against the
//! reference solution, writing per-student difference reports and a
//! consolidated score table.
//!
//! ## Usage
//!
//! `docmark [ASSIGNMENT]` — grades the named assignment, or the most
//! recently modified folder under `assignments/` when no identifier is
//! given.

use bpaf::*;
use docmark::{eval::Evaluator, extract::BridgeClient};
use dotenvy::dotenv;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Parse the command line arguments and return the optional assignment
/// identifier.
fn options() -> Option<String> {
    positional::<String>("ASSIGNMENT")
        .help("Assignment identifier (defaults to the most recently modified submissions folder)")
        .optional()
        .to_options()
        .descr("Autograder for document submissions")
        .run()
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let assignment = options();

    let bridge = match BridgeClient::from_env() {
        Ok(bridge) => bridge,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let evaluator = Evaluator::builder()
        .assignment(assignment)
        .bridge(bridge)
        .build();

    if let Err(e) = evaluator.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
