use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::time::{format_calendar, parse_calendar};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("designation must not be empty")]
    EmptyDesignation,
    #[error("unparseable close-approach time {input:?}")]
    InvalidTime { input: String },
    #[error("{field} is not a number: {input:?}")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

fn validated_designation(designation: impl Into<String>) -> Result<String, ValidationError> {
    let designation = designation.into().trim().to_string();
    if designation.is_empty() {
        return Err(ValidationError::EmptyDesignation);
    }
    Ok(designation)
}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber { field, input: input.to_string() })?;
    finite(field, value)
}

/// A near-Earth object as listed in the NEO catalog.
///
/// `approaches` holds positions into the owning database's approach list and is
/// only populated by [`super::NeoDatabase::load`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: Option<f64>,
    hazardous: bool,
    pub(crate) approaches: Vec<usize>,
}

impl NearEarthObject {
    /// Build a NEO. An empty name is treated as unknown, as is a NaN diameter.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Result<Self, ValidationError> {
        let designation = validated_designation(designation)?;
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let diameter = diameter.filter(|d| !d.is_nan());
        Ok(Self { designation, name, diameter, hazardous, approaches: Vec::new() })
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, `None` when the catalog has no estimate.
    pub fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// Designation followed by the name in parentheses when one is known.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter {
            Some(d) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} hazardous.",
                self.fullname(),
                d,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {} hazardous.",
                self.fullname(),
                hazard
            ),
        }
    }
}

/// One recorded pass of a NEO near Earth.
///
/// Rendered for display through [`super::ApproachRef`], which carries the linked NEO.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<usize>,
}

impl CloseApproach {
    /// Build an approach from a calendar time (`2020-Jan-01 12:30`), a distance in
    /// astronomical units and a relative velocity in km/s.
    pub fn new(
        designation: impl Into<String>,
        time: &str,
        distance: f64,
        velocity: f64,
    ) -> Result<Self, ValidationError> {
        let designation = validated_designation(designation)?;
        let time = parse_calendar(time)
            .ok_or_else(|| ValidationError::InvalidTime { input: time.to_string() })?;
        Ok(Self {
            designation,
            time,
            distance: finite("distance", distance)?,
            velocity: finite("velocity", velocity)?,
            neo: None,
        })
    }

    /// Same as [`CloseApproach::new`] with distance and velocity still in textual form.
    pub fn from_fields(
        designation: impl Into<String>,
        time: &str,
        distance: &str,
        velocity: &str,
    ) -> Result<Self, ValidationError> {
        let distance = parse_number("distance", distance)?;
        let velocity = parse_number("velocity", velocity)?;
        Self::new(designation, time, distance, velocity)
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    pub fn time_str(&self) -> String {
        format_calendar(&self.time)
    }

    /// Nominal approach distance in astronomical units.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Velocity relative to Earth in km/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub(crate) fn neo_index(&self) -> Option<usize> {
        self.neo
    }

    pub(crate) fn link(&mut self, neo: usize) {
        self.neo = Some(neo);
    }
}
