//! Command-line definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use neo_explorer::query::QueryOptions;

#[derive(Debug, Parser)]
#[command(name = "neo-explorer")]
#[command(about = "Explore past and future close approaches of near-Earth objects")]
#[command(version)]
pub struct Cli {
    /// NEO catalog CSV
    #[arg(long, global = true, default_value = "data/neos.csv")]
    pub neofile: PathBuf,

    /// Close-approach JSON
    #[arg(long, global = true, default_value = "data/cad.json")]
    pub cadfile: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one NEO by primary designation or by name
    Inspect(InspectArgs),

    /// List close approaches matching the given bounds
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Primary designation, e.g. 433
    #[arg(short, long, required_unless_present = "name", conflicts_with = "name")]
    pub pdes: Option<String>,

    /// IAU name, e.g. Eros
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also list every close approach of the NEO
    #[arg(long)]
    pub verbose_approaches: bool,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance in au
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance in au
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity in km/s
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity in km/s
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter in km
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter in km
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results (0 or negative for no limit)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Write results to this .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

impl QueryArgs {
    pub fn options(&self) -> QueryOptions {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };
        QueryOptions {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            min_velocity: self.min_velocity,
            max_velocity: self.max_velocity,
            min_diameter: self.min_diameter,
            max_diameter: self.max_diameter,
            hazardous,
            limit: self
                .limit
                .and_then(|n| usize::try_from(n).ok())
                .filter(|&n| n > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("neo-explorer").chain(args.iter().copied()))
    }

    #[test]
    fn query_flags_map_to_options() {
        let cli = parse(&[
            "query", "--start-date", "2020-01-01", "--max-distance", "0.1", "--hazardous", "--limit", "5",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command else { panic!("expected query") };
        let options = args.options();
        assert_eq!(options.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(options.max_distance, Some(0.1));
        assert_eq!(options.hazardous, Some(true));
        assert_eq!(options.limit, Some(5));
        assert_eq!(cli.neofile, PathBuf::from("data/neos.csv"));
    }

    #[test]
    fn hazard_flags_are_exclusive() {
        assert!(parse(&["query", "--hazardous", "--not-hazardous"]).is_err());
        let cli = parse(&["query", "--not-hazardous"]).unwrap();
        let Commands::Query(args) = cli.command else { panic!("expected query") };
        assert_eq!(args.options().hazardous, Some(false));
    }

    #[test]
    fn non_positive_limit_is_unbounded() {
        for args in [
            &["query", "--limit", "-1"][..],
            &["query", "--limit=-3"][..],
            &["query", "--limit", "0"][..],
            &["query"][..],
        ] {
            let cli = parse(args).unwrap();
            let Commands::Query(args) = cli.command else { panic!("expected query") };
            assert_eq!(args.options().limit, None);
        }
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(parse(&["query", "--date", "2020-Jan-01"]).is_err());
    }

    #[test]
    fn inspect_needs_exactly_one_selector() {
        assert!(parse(&["inspect"]).is_err());
        assert!(parse(&["inspect", "--pdes", "433", "--name", "Eros"]).is_err());
        let cli = parse(&["--cadfile", "other.json", "inspect", "--name", "Eros"]).unwrap();
        assert_eq!(cli.cadfile, PathBuf::from("other.json"));
        let Commands::Inspect(args) = cli.command else { panic!("expected inspect") };
        assert_eq!(args.name.as_deref(), Some("Eros"));
    }
}
