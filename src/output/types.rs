use serde::Serialize;

use crate::model::{ApproachRef, NearEarthObject};

#[derive(Debug, Serialize)]
pub struct NeoDto {
    pub designation: String,
    pub name: String,
    pub diameter_km: Option<f64>,
    pub potentially_hazardous: bool,
}

impl From<&NearEarthObject> for NeoDto {
    fn from(neo: &NearEarthObject) -> Self {
        NeoDto {
            designation: neo.designation().to_string(),
            name: neo.name().unwrap_or_default().to_string(),
            diameter_km: neo.diameter(),
            potentially_hazardous: neo.hazardous(),
        }
    }
}

/// Nested shape used for JSON output.
#[derive(Debug, Serialize)]
pub struct ApproachDto {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoDto,
}

impl From<&ApproachRef<'_>> for ApproachDto {
    fn from(ca: &ApproachRef<'_>) -> Self {
        ApproachDto {
            datetime_utc: ca.time_str(),
            distance_au: ca.distance(),
            velocity_km_s: ca.velocity(),
            neo: NeoDto::from(ca.neo()),
        }
    }
}

/// Flat shape used for CSV output; unknown diameters are written as `NaN`.
#[derive(Debug, Serialize)]
pub struct ApproachRow {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

impl ApproachRow {
    pub const HEADER: [&'static str; 7] = [
        "datetime_utc",
        "distance_au",
        "velocity_km_s",
        "designation",
        "name",
        "diameter_km",
        "potentially_hazardous",
    ];
}

impl From<&ApproachRef<'_>> for ApproachRow {
    fn from(ca: &ApproachRef<'_>) -> Self {
        let neo = ca.neo();
        ApproachRow {
            datetime_utc: ca.time_str(),
            distance_au: ca.distance(),
            velocity_km_s: ca.velocity(),
            designation: neo.designation().to_string(),
            name: neo.name().unwrap_or_default().to_string(),
            diameter_km: neo.diameter().unwrap_or(f64::NAN),
            potentially_hazardous: neo.hazardous(),
        }
    }
}
