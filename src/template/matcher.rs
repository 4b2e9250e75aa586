//! Line matching for substitution rules.

use serde::{Deserialize, Serialize};

/// How a rule's pattern is located within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matcher {
    /// Pattern may appear anywhere in the line.
    #[default]
    Contains,
    /// Pattern must start the line, after leading indentation.
    Prefix,
}

impl Matcher {
    /// Byte offset of the pattern within `content`, if it matches.
    pub fn locate(&self, pattern: &str, content: &str) -> Option<usize> {
        match self {
            Matcher::Contains => content.find(pattern),
            Matcher::Prefix => {
                let trimmed = content.trim_start_matches([' ', '\t']);
                trimmed
                    .starts_with(pattern)
                    .then(|| content.len() - trimmed.len())
            }
        }
    }
}

/// How many lines a single rule may rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Rewrite the first matching line, then move on to the next rule.
    #[default]
    FirstOnly,
    /// Rewrite every matching line.
    All,
}

impl MatchPolicy {
    /// Whether scanning continues after a rewrite.
    pub fn continues_after_match(&self) -> bool {
        matches!(self, MatchPolicy::All)
    }
}
