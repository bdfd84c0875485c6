mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cli::{Cli, Commands, InspectArgs, QueryArgs};
use neo_explorer::model::NeoDatabase;
use neo_explorer::{collectors, output, query, utils};

fn main() -> ExitCode {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let neos = match collectors::load_neos(&cli.neofile) {
        Ok(neos) => neos,
        Err(e) => {
            error!(error = %e, path = %cli.neofile.display(), "Failed to load NEOs");
            return ExitCode::FAILURE;
        }
    };
    let approaches = match collectors::load_approaches(&cli.cadfile) {
        Ok(approaches) => approaches,
        Err(e) => {
            error!(error = %e, path = %cli.cadfile.display(), "Failed to load close approaches");
            return ExitCode::FAILURE;
        }
    };
    let db = NeoDatabase::load(neos, approaches);

    match &cli.command {
        Commands::Inspect(args) => inspect(&db, args),
        Commands::Query(args) => run_query(&db, args),
    }
}

fn inspect(db: &NeoDatabase, args: &InspectArgs) -> ExitCode {
    let found = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => None,
    };
    let Some(neo) = found else {
        eprintln!("No matching NEOs exist in the database.");
        return ExitCode::SUCCESS;
    };

    println!("{neo}");
    if args.verbose_approaches {
        for ca in db.approaches_of(neo) {
            println!("- {ca}");
        }
    }
    ExitCode::SUCCESS
}

fn run_query(db: &NeoDatabase, args: &QueryArgs) -> ExitCode {
    let options = args.options();
    let filters = query::create_filters(&options);
    let results = query::query(db, &filters, options.limit);

    match &args.outfile {
        Some(path) => match output::write_results(results, path) {
            Ok(count) => {
                info!(count, path = %path.display(), "Saved query results");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to write results");
                ExitCode::FAILURE
            }
        },
        None => {
            let mut count = 0usize;
            for ca in results {
                println!("{ca}");
                count += 1;
            }
            info!(count, "Printed query results");
            ExitCode::SUCCESS
        }
    }
}
