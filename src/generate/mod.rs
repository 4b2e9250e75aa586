//! Script generation for a batch of event files.
//!
//! Each event file is handled on its own: load the event, then for every
//! template fetch it, rewrite it, and write `<event_tag>_<template>` into the
//! output directory. A failure stops the event it belongs to and is recorded
//! in the [`BatchReport`]; remaining events still run.

mod naming;
mod report;


pub use naming::output_file_name;
pub use report::{BatchReport, EventOutcome, GeneratedScript};

use crate::error::{GenError, Result};
use crate::event;
use crate::fetch::{fetch_template, Fetcher, TemplateSource};
use crate::fs::atomic_write_file;
use crate::template::{self, MatchPolicy, RuleTable};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Renders a fixed template list for each event file.
pub struct Generator<'a> {
    output_dir: PathBuf,
    templates: Vec<TemplateSource>,
    rules: RuleTable,
    policy: MatchPolicy,
    fetcher: &'a dyn Fetcher,
}

impl<'a> Generator<'a> {
    /// Create a generator writing into `output_dir`.
    ///
    /// Fails with [`GenError::Precondition`] if `output_dir` is not an
    /// existing directory.
    pub fn new(
        output_dir: impl Into<PathBuf>,
        templates: Vec<TemplateSource>,
        fetcher: &'a dyn Fetcher,
    ) -> Result<Self> {
        let output_dir = output_dir.into();

        if !output_dir.is_dir() {
            return Err(GenError::Precondition(format!(
                "output directory does not exist: {}",
                output_dir.display()
            )));
        }

        Ok(Self {
            output_dir,
            templates,
            rules: RuleTable::default_table(),
            policy: MatchPolicy::default(),
            fetcher,
        })
    }

    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Process every input in order.
    pub fn run(&self, inputs: &[PathBuf]) -> BatchReport {
        let events = inputs
            .iter()
            .map(|input| self.process_event(input))
            .collect();

        BatchReport {
            output_dir: self.output_dir.clone(),
            events,
        }
    }

    /// Process one event file, recording either its scripts or its error.
    pub fn process_event(&self, input: &Path) -> EventOutcome {
        let mut outcome = EventOutcome::new(input);

        if let Err(err) = self.generate_into(input, &mut outcome) {
            warn!(input = %input.display(), error = %err, "event failed");
            outcome.fail(&err);
        }

        outcome
    }

    fn generate_into(&self, input: &Path, outcome: &mut EventOutcome) -> Result<()> {
        if !input.is_file() {
            return Err(GenError::Precondition(format!(
                "input file not found: {}",
                input.display()
            )));
        }

        let record = event::load(input, &self.output_dir)?;
        outcome.event_tag = Some(record.event_tag().to_string());

        for source in &self.templates {
            let file_name = output_file_name(record.event_tag(), source)?;
            let template = fetch_template(source, self.fetcher)?;
            let rendered = template::apply(&self.rules, &record, &template, self.policy)?;

            let output = self.output_dir.join(file_name);
            atomic_write_file(&output, &rendered.render())?;

            info!(
                event = record.event_tag(),
                template = %source,
                output = %output.display(),
                "wrote script"
            );
            outcome.written.push(GeneratedScript {
                template: source.to_string(),
                output,
            });
        }

        Ok(())
    }
}
