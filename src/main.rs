mod commands;
mod logging;

use crate::commands::{allocate, info, what_if, MethodArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about = "Modified Sainte-Laguë seat allocation and seat margins")]
struct Opts {
    /// Log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u64,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about an election file.
    Info {
        /// Election JSON file.
        election: PathBuf,
    },
    /// Allocate seats and compute the votes needed to gain or lose seats.
    Allocate {
        /// Election JSON file.
        election: PathBuf,
        #[clap(flatten)]
        method: MethodArgs,
        /// Also write the full report as JSON to this path.
        #[clap(long)]
        json: Option<PathBuf>,
    },
    /// Reallocate after changing one party's vote total.
    WhatIf {
        /// Election JSON file.
        election: PathBuf,
        /// Party name as listed in the election file.
        #[clap(long)]
        party: String,
        /// Signed change to the party's votes (e.g. 738 or -205).
        #[clap(long, allow_hyphen_values = true)]
        delta: i64,
        #[clap(flatten)]
        method: MethodArgs,
    },
}

fn main() {
    let opts = Opts::parse();
    logging::init(opts.verbose);

    let result = match opts.command {
        Command::Info { election } => info(&election),
        Command::Allocate {
            election,
            method,
            json,
        } => allocate(&election, &method, json.as_deref()),
        Command::WhatIf {
            election,
            party,
            delta,
            method,
        } => what_if(&election, &party, delta, &method),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
