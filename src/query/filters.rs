//! Single-attribute predicates over linked close approaches.
//!
//! A query is the AND of zero or more [`AttributeFilter`]s. [`create_filters`]
//! turns the user-facing [`QueryOptions`] into the minimal filter set: one
//! filter per bound actually supplied.

use std::fmt;

use chrono::NaiveDate;

use crate::model::ApproachRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Le,
    Ge,
}

impl Comparator {
    pub fn compare<T: PartialOrd>(self, value: &T, bound: &T) -> bool {
        match self {
            Comparator::Eq => value == bound,
            Comparator::Le => value <= bound,
            Comparator::Ge => value >= bound,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Eq => "==",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeFilter {
    /// Calendar date of the approach, time of day ignored.
    Date(Comparator, NaiveDate),
    /// Approach distance in au.
    Distance(Comparator, f64),
    /// Relative velocity in km/s.
    Velocity(Comparator, f64),
    /// Diameter of the linked NEO in km. Unknown diameters never match.
    Diameter(Comparator, f64),
    Hazardous(bool),
}

impl AttributeFilter {
    pub fn matches(&self, approach: &ApproachRef<'_>) -> bool {
        match self {
            AttributeFilter::Date(op, bound) => op.compare(&approach.date(), bound),
            AttributeFilter::Distance(op, bound) => op.compare(&approach.distance(), bound),
            AttributeFilter::Velocity(op, bound) => op.compare(&approach.velocity(), bound),
            AttributeFilter::Diameter(op, bound) => approach
                .neo()
                .diameter()
                .is_some_and(|d| op.compare(&d, bound)),
            AttributeFilter::Hazardous(flag) => approach.neo().hazardous() == *flag,
        }
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeFilter::Date(op, d) => write!(f, "DateFilter({} {})", op.symbol(), d),
            AttributeFilter::Distance(op, v) => write!(f, "DistanceFilter({} {})", op.symbol(), v),
            AttributeFilter::Velocity(op, v) => write!(f, "VelocityFilter({} {})", op.symbol(), v),
            AttributeFilter::Diameter(op, v) => write!(f, "DiameterFilter({} {})", op.symbol(), v),
            AttributeFilter::Hazardous(flag) => write!(f, "HazardFilter(== {})", flag),
        }
    }
}

/// Query bounds as supplied by the command layer.
///
/// `hazardous` is `Some(true)` for `--hazardous`, `Some(false)` for
/// `--not-hazardous`. A `limit` of `None` or `Some(0)` is unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_distance: Option<f64>,
    pub max_distance: Option<f64>,
    pub min_velocity: Option<f64>,
    pub max_velocity: Option<f64>,
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
    pub hazardous: Option<bool>,
    pub limit: Option<usize>,
}

pub fn create_filters(options: &QueryOptions) -> Vec<AttributeFilter> {
    use AttributeFilter::*;
    use Comparator::{Eq, Ge, Le};

    let candidates = [
        options.date.map(|d| Date(Eq, d)),
        options.start_date.map(|d| Date(Ge, d)),
        options.end_date.map(|d| Date(Le, d)),
        options.min_distance.map(|v| Distance(Ge, v)),
        options.max_distance.map(|v| Distance(Le, v)),
        options.min_velocity.map(|v| Velocity(Ge, v)),
        options.max_velocity.map(|v| Velocity(Le, v)),
        options.min_diameter.map(|v| Diameter(Ge, v)),
        options.max_diameter.map(|v| Diameter(Le, v)),
        options.hazardous.map(Hazardous),
    ];
    candidates.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{approach, neo};
    use crate::model::NeoDatabase;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn single(diameter: Option<f64>, hazardous: bool) -> NeoDatabase {
        NeoDatabase::load(
            vec![neo("2001 XY", None, diameter, hazardous)],
            vec![approach("2001 XY", "2020-Jan-01 23:59", 0.2, 12.5)],
        )
    }

    #[test]
    fn date_filters_ignore_time_of_day() {
        let db = single(Some(1.0), false);
        let ca = db.approaches().next().unwrap();
        assert!(AttributeFilter::Date(Comparator::Eq, ymd(2020, 1, 1)).matches(&ca));
        assert!(AttributeFilter::Date(Comparator::Le, ymd(2020, 1, 1)).matches(&ca));
        assert!(AttributeFilter::Date(Comparator::Ge, ymd(2020, 1, 1)).matches(&ca));
        assert!(!AttributeFilter::Date(Comparator::Ge, ymd(2020, 1, 2)).matches(&ca));
    }

    #[test]
    fn distance_and_velocity_bounds_are_inclusive() {
        let db = single(Some(1.0), false);
        let ca = db.approaches().next().unwrap();
        assert!(AttributeFilter::Distance(Comparator::Ge, 0.2).matches(&ca));
        assert!(AttributeFilter::Distance(Comparator::Le, 0.2).matches(&ca));
        assert!(!AttributeFilter::Distance(Comparator::Le, 0.1).matches(&ca));
        assert!(AttributeFilter::Velocity(Comparator::Le, 12.5).matches(&ca));
        assert!(!AttributeFilter::Velocity(Comparator::Ge, 13.0).matches(&ca));
    }

    #[test]
    fn unknown_diameter_never_matches() {
        let db = single(None, false);
        let ca = db.approaches().next().unwrap();
        assert!(!AttributeFilter::Diameter(Comparator::Ge, 0.0).matches(&ca));
        assert!(!AttributeFilter::Diameter(Comparator::Le, f64::MAX).matches(&ca));

        let db = single(Some(2.5), false);
        let ca = db.approaches().next().unwrap();
        assert!(AttributeFilter::Diameter(Comparator::Ge, 2.5).matches(&ca));
    }

    #[test]
    fn hazard_filter_checks_linked_neo() {
        let db = single(None, true);
        let ca = db.approaches().next().unwrap();
        assert!(AttributeFilter::Hazardous(true).matches(&ca));
        assert!(!AttributeFilter::Hazardous(false).matches(&ca));
    }

    #[test]
    fn no_options_no_filters() {
        assert!(create_filters(&QueryOptions::default()).is_empty());
    }

    #[test]
    fn one_filter_per_supplied_bound() {
        let options = QueryOptions {
            start_date: Some(ymd(2020, 1, 1)),
            end_date: Some(ymd(2020, 12, 31)),
            min_distance: Some(0.3),
            max_diameter: Some(1.5),
            hazardous: Some(false),
            limit: Some(5),
            ..Default::default()
        };
        let filters = create_filters(&options);
        assert_eq!(
            filters,
            vec![
                AttributeFilter::Date(Comparator::Ge, ymd(2020, 1, 1)),
                AttributeFilter::Date(Comparator::Le, ymd(2020, 12, 31)),
                AttributeFilter::Distance(Comparator::Ge, 0.3),
                AttributeFilter::Diameter(Comparator::Le, 1.5),
                AttributeFilter::Hazardous(false),
            ]
        );
    }

    #[test]
    fn filters_render_for_logs() {
        assert_eq!(AttributeFilter::Distance(Comparator::Ge, 0.3).to_string(), "DistanceFilter(>= 0.3)");
        assert_eq!(
            AttributeFilter::Date(Comparator::Eq, ymd(2020, 1, 1)).to_string(),
            "DateFilter(== 2020-01-01)"
        );
        assert_eq!(AttributeFilter::Hazardous(true).to_string(), "HazardFilter(== true)");
    }
}
