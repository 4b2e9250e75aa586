//! mtgen: generate event-specific moment tensor scripts.
//!
//! This is the main entry point for the `mtgen` CLI. It parses arguments,
//! sets up logging, runs the batch, and maps failures to exit codes.

mod cli;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod fetch;
pub mod fs;
pub mod generate;
pub mod settings;
pub mod template;

use cli::Cli;
use error::Result;
use fetch::{HttpFetcher, TemplateSource};
use generate::Generator;
use settings::Settings;
use std::process::ExitCode;
use template::MatchPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the batch and return the exit code of its first failure.
///
/// Errors returned here abort the whole run (bad settings, missing output
/// directory); per-event failures are carried in the report instead.
fn run(cli: Cli) -> Result<i32> {
    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_templates(cli.templates);

    let policy = if cli.all_matches {
        MatchPolicy::All
    } else {
        settings.match_policy
    };

    let templates = settings
        .templates
        .iter()
        .map(|location| TemplateSource::parse(location))
        .collect();

    let fetcher = HttpFetcher::new(settings.fetch.timeout(), settings.fetch.retry_policy())?;
    let generator = Generator::new(&cli.output_dir, templates, &fetcher)?.with_policy(policy);

    let report = generator.run(&cli.inputs);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }

    Ok(report.exit_code())
}
