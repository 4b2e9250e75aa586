//! Rule application.

use super::document::{split_terminator, Template};
use super::matcher::MatchPolicy;
use super::rules::{Rule, RuleTable};
use crate::error::{GenError, Result};
use crate::event::EventRecord;
use tracing::debug;

/// Apply every rule in `rules` to `template`, in table order.
///
/// For a matching line, everything after the pattern is replaced by the
/// formatted value and a trailing comma. Spaces or tabs directly after the
/// pattern are kept so aligned assignments stay aligned, and the line
/// terminator is kept.
///
/// Rules with no matching line are skipped. A matching rule whose value is
/// absent from the record fails with [`GenError::MissingField`].
///
/// The returned template always has the same number of lines as the input.
pub fn apply(
    rules: &RuleTable,
    record: &EventRecord,
    template: &Template,
    policy: MatchPolicy,
) -> Result<Template> {
    let mut output = template.clone();

    for rule in rules.iter() {
        let mut rewritten = 0usize;

        for (index, line) in output.lines_mut().iter_mut().enumerate() {
            let Some(new_line) = rewrite_line(rule, record, line)? else {
                continue;
            };

            debug!(pattern = %rule.pattern, line = index + 1, "rewrote template line");
            *line = new_line;
            rewritten += 1;

            if !policy.continues_after_match() {
                break;
            }
        }

        if rewritten == 0 {
            debug!(pattern = %rule.pattern, "no template line matched rule");
        }
    }

    Ok(output)
}

/// Rewrite a single line, or `None` if the rule does not match it.
fn rewrite_line(rule: &Rule, record: &EventRecord, line: &str) -> Result<Option<String>> {
    let (content, terminator) = split_terminator(line);

    let Some(start) = rule.matcher.locate(&rule.pattern, content) else {
        return Ok(None);
    };

    let value = rule
        .field
        .value(record)
        .ok_or(GenError::MissingField {
            field: rule.field.source_key(),
        })?;

    let after_pattern = start + rule.pattern.len();
    let padding = content[after_pattern..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();
    let keep = &content[..after_pattern + padding];

    Ok(Some(format!(
        "{keep}{},{terminator}",
        rule.format.render(value)
    )))
}
