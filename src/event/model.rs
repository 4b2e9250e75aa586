//! Raw and validated event data structures.

use crate::error::{GenError, Result};
use serde::Deserialize;
use std::path::Path;

/// Required event fields, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &[
    "event_tag",
    "origin_time",
    "event_latitude",
    "event_longitude",
    "event_depth_km",
];

/// Event document as parsed from YAML, before validation.
///
/// Every field is optional here; [`RawEventDocument::validate`] turns it into
/// an [`EventRecord`] or reports the first missing required field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEventDocument {
    pub event_tag: Option<String>,
    pub origin_time: Option<String>,
    pub event_latitude: Option<f64>,
    pub event_longitude: Option<f64>,
    pub event_depth_km: Option<f64>,
    pub event_magnitude: Option<f64>,

    /// Waveform data location, usually a glob such as `SAC/*.sac`.
    #[serde(alias = "path_data")]
    pub data_path: Option<String>,

    /// Station weights file.
    #[serde(alias = "path_weights")]
    pub weight_path: Option<String>,
}

impl RawEventDocument {
    /// Validate required fields and derive default data paths.
    ///
    /// `output_dir` is the PySEP output directory; when the document does not
    /// name the data or weights path they are derived beneath it. The
    /// directory is made absolute but never touched on disk.
    pub fn validate(self, output_dir: &Path) -> Result<EventRecord> {
        let event_tag = require(self.event_tag, "event_tag")?;
        let origin_time = require(self.origin_time, "origin_time")?;
        let latitude = require(self.event_latitude, "event_latitude")?;
        let longitude = require(self.event_longitude, "event_longitude")?;
        let depth_km = require(self.event_depth_km, "event_depth_km")?;

        let base = std::path::absolute(output_dir).map_err(|e| {
            GenError::Precondition(format!(
                "cannot resolve output directory '{}': {}",
                output_dir.display(),
                e
            ))
        })?;

        let path_data = self.data_path.unwrap_or_else(|| {
            base.join("SAC")
                .join("*.sac")
                .to_string_lossy()
                .into_owned()
        });
        let path_weights = self
            .weight_path
            .unwrap_or_else(|| base.join("weights.dat").to_string_lossy().into_owned());

        Ok(EventRecord {
            event_tag,
            origin_time,
            latitude,
            longitude,
            depth_km,
            magnitude: self.event_magnitude,
            path_data,
            path_weights,
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(GenError::MissingField { field })
}

/// A validated seismic event.
///
/// Only produced by [`RawEventDocument::validate`], so every required field
/// is present. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    event_tag: String,
    origin_time: String,
    latitude: f64,
    longitude: f64,
    depth_km: f64,
    magnitude: Option<f64>,
    path_data: String,
    path_weights: String,
}

impl EventRecord {
    pub fn event_tag(&self) -> &str {
        &self.event_tag
    }

    /// Origin time exactly as written in the event file.
    pub fn origin_time(&self) -> &str {
        &self.origin_time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn depth_km(&self) -> f64 {
        self.depth_km
    }

    /// Depth converted to meters, as templates expect it.
    pub fn depth_m(&self) -> f64 {
        self.depth_km * 1.0e3
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    pub fn path_data(&self) -> &str {
        &self.path_data
    }

    pub fn path_weights(&self) -> &str {
        &self.path_weights
    }
}
