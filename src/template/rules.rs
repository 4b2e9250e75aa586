//! Substitution rules and the default rule table.

use super::matcher::Matcher;
use crate::event::EventRecord;

/// Event value a rule writes into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PathData,
    PathWeights,
    OriginTime,
    Latitude,
    Longitude,
    /// `event_depth_km` converted to meters.
    DepthMeters,
    Magnitude,
}

/// A value read from an [`EventRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl Field {
    /// Name of the event file key backing this field.
    pub fn source_key(&self) -> &'static str {
        match self {
            Field::PathData => "path_data",
            Field::PathWeights => "path_weights",
            Field::OriginTime => "origin_time",
            Field::Latitude => "event_latitude",
            Field::Longitude => "event_longitude",
            Field::DepthMeters => "event_depth_km",
            Field::Magnitude => "event_magnitude",
        }
    }

    /// Read this field from a record. Only optional fields can be `None`.
    pub fn value<'a>(&self, record: &'a EventRecord) -> Option<FieldValue<'a>> {
        match self {
            Field::PathData => Some(FieldValue::Text(record.path_data())),
            Field::PathWeights => Some(FieldValue::Text(record.path_weights())),
            Field::OriginTime => Some(FieldValue::Text(record.origin_time())),
            Field::Latitude => Some(FieldValue::Number(record.latitude())),
            Field::Longitude => Some(FieldValue::Number(record.longitude())),
            Field::DepthMeters => Some(FieldValue::Number(record.depth_m())),
            Field::Magnitude => record.magnitude().map(FieldValue::Number),
        }
    }
}

/// How a value is written into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single-quoted string literal: `'value'`.
    Quoted,
    /// Decimal with six fractional digits: `61.454200`.
    Decimal,
    /// Single-element list of a decimal: `[4.500000]`.
    List,
}

impl Format {
    pub fn render(&self, value: FieldValue<'_>) -> String {
        let plain = match value {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Number(n) => format!("{n:.6}"),
        };

        match self {
            Format::Quoted => format!("'{plain}'"),
            Format::Decimal => plain,
            Format::List => format!("[{plain}]"),
        }
    }
}

/// One line rewrite: where to find the assignment, what to write into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub pattern: String,
    pub matcher: Matcher,
    pub field: Field,
    pub format: Format,
}

impl Rule {
    /// A rule matching its pattern anywhere in a line.
    pub fn new(pattern: impl Into<String>, field: Field, format: Format) -> Self {
        Self {
            pattern: pattern.into(),
            matcher: Matcher::Contains,
            field,
            format,
        }
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }
}

/// Ordered list of rules applied to every template.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules for the MTUQ grid search example scripts.
    ///
    /// Patterns carry no trailing padding; alignment whitespace after the
    /// pattern is preserved by the engine.
    pub fn default_table() -> Self {
        Self::new(vec![
            Rule::new("path_data=", Field::PathData, Format::Quoted),
            Rule::new("path_weights=", Field::PathWeights, Format::Quoted),
            Rule::new("'time':", Field::OriginTime, Format::Quoted),
            Rule::new("'latitude':", Field::Latitude, Format::Decimal),
            Rule::new("'longitude':", Field::Longitude, Format::Decimal),
            Rule::new("'depth_in_m':", Field::DepthMeters, Format::Decimal),
            Rule::new("magnitude=", Field::Magnitude, Format::Decimal),
            Rule::new("magnitudes=", Field::Magnitude, Format::List),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::default_table()
    }
}
