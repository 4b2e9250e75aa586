//! CLI argument parsing for mtgen.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! generation itself lives in the `generate` module.

use clap::Parser;
use std::path::PathBuf;

/// mtgen: generate event-specific moment tensor scripts.
///
/// Reads PySEP event files and rewrites the event parameters (origin time,
/// hypocenter, magnitude, data paths) in each template script. Each event
/// produces `<event_tag>_<template>` in the output directory.
///
/// Typical workflow:
///
///   pysep -c config.yaml
///   mtgen OUTPUT_DIR config.yaml
///   cd OUTPUT_DIR && mpirun -n 4 python <event_tag>_GridSearch.FullMomentTensor.py
#[derive(Parser, Debug)]
#[command(name = "mtgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PySEP output directory; scripts are written here and default data
    /// paths are derived from it.
    pub output_dir: PathBuf,

    /// PySEP event files to process.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Template path or URL (repeatable). Overrides the settings file.
    #[arg(short, long = "template", value_name = "LOCATION")]
    pub templates: Vec<String>,

    /// Settings YAML file.
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Rewrite every line matching a rule instead of only the first.
    #[arg(long)]
    pub all_matches: bool,

    /// Print the batch report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["mtgen", "out", "event.yaml"]).unwrap();

        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.inputs, vec![PathBuf::from("event.yaml")]);
        assert!(cli.templates.is_empty());
        assert!(cli.settings.is_none());
        assert!(!cli.all_matches);
        assert!(!cli.json);
    }

    #[test]
    fn parse_multiple_inputs_and_templates() {
        let cli = Cli::try_parse_from([
            "mtgen",
            "out",
            "a.yaml",
            "b.yaml",
            "--template",
            "GridSearch.DoubleCouple.py",
            "-t",
            "https://example.com/GridSearch.FullMomentTensor.py",
            "--settings",
            "mtgen.yaml",
            "--all-matches",
            "--json",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(cli.templates.len(), 2);
        assert_eq!(cli.settings, Some(PathBuf::from("mtgen.yaml")));
        assert!(cli.all_matches);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn inputs_are_required() {
        assert!(Cli::try_parse_from(["mtgen", "out"]).is_err());
    }
}
