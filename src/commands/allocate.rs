use super::MethodArgs;
use colored::*;
use seat_margin::model::{Election, ElectionError};
use seat_margin::reports::generate_election_report;
use seat_margin::reports::text::{print_gain_margins, print_loss_margins, print_seat_table};
use seat_margin::util::write_serialized;
use std::path::Path;

pub fn allocate(path: &Path, args: &MethodArgs, json: Option<&Path>) -> Result<(), ElectionError> {
    let election = Election::load(path)?;
    let (seats, method) = args.resolve(&election);

    println!(
        "🚀 Allocating {} seats for {}",
        seats.to_string().bright_cyan(),
        election.name.bright_cyan()
    );

    let allocation = election.allocate_with(seats, &method)?;
    let report = generate_election_report(&election, &allocation);

    print_seat_table(&report);
    print_gain_margins(&report);
    print_loss_margins(&report);

    if let Some(json_path) = json {
        write_serialized(json_path, &report)?;
        println!(
            "\n✅ Report written: {}",
            json_path.display().to_string().bright_green()
        );
    }

    Ok(())
}
