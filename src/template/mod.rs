//! Template substitution for mtgen.
//!
//! A template is a script with placeholder assignment lines such as
//! `'latitude': 61.45,` or `path_data=    fullpath('...')`. An ordered
//! [`RuleTable`] names which lines to rewrite and how to format the event
//! value written into each one; [`apply`] performs a single pass over the
//! template for every rule.
//!
//! Rewriting is not idempotent: patterns target the unsubstituted assignment
//! syntax, so running a rewritten template through the table again is not a
//! supported operation.

mod document;
mod engine;
mod matcher;
mod rules;


pub use document::Template;
pub use engine::apply;
pub use matcher::{MatchPolicy, Matcher};
pub use rules::{Field, FieldValue, Format, Rule, RuleTable};
