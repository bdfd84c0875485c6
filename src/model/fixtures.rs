//! Small hand-made dataset shared by the database, filter and query tests.

use super::{CloseApproach, NearEarthObject, NeoDatabase};

pub(crate) fn neo(designation: &str, name: Option<&str>, diameter: Option<f64>, hazardous: bool) -> NearEarthObject {
    NearEarthObject::new(designation, name.map(String::from), diameter, hazardous).unwrap()
}

pub(crate) fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
    CloseApproach::new(designation, time, distance, velocity).unwrap()
}

/// Five NEOs and eight approaches, the last of which has no matching NEO.
pub(crate) fn sample_database() -> NeoDatabase {
    let neos = vec![
        neo("433", Some("Eros"), Some(16.84), false),
        neo("99942", Some("Apophis"), Some(0.37), true),
        neo("3200", Some("Phaethon"), Some(5.1), true),
        neo("2020 AB", None, None, true),
        neo("1036", Some("Ganymed"), Some(37.675), false),
    ];
    let approaches = vec![
        approach("433", "1900-Dec-27 01:30", 0.3153, 5.58),
        approach("99942", "2029-Apr-13 21:46", 0.00025, 7.42),
        approach("3200", "2017-Dec-16 23:00", 0.0689, 36.1),
        approach("2020 AB", "2020-Jan-01 12:30", 0.05, 40.0),
        approach("1036", "2024-Oct-13 02:03", 0.3743, 7.0),
        approach("433", "2056-Jan-24 15:20", 0.4, 4.0),
        approach("3200", "2093-Dec-14 09:00", 0.02, 30.0),
        approach("ORPHAN-1", "2020-Feb-02 00:00", 0.1, 10.0),
    ];
    NeoDatabase::load(neos, approaches)
}
