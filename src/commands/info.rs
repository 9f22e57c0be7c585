use colored::*;
use itertools::Itertools;
use seat_margin::model::{Election, ElectionError};
use seat_margin::reports::text::print_seat_table;
use seat_margin::reports::generate_election_report;
use std::path::Path;

pub fn info(path: &Path) -> Result<(), ElectionError> {
    println!("🔍 Validating {}", path.display().to_string().bright_cyan());

    let election = Election::load(path)?;
    println!(
        "📋 {}: {} parties ({}), {} votes, {} seats",
        election.name.bright_yellow(),
        election.parties.len(),
        election.parties.iter().join(", "),
        election.total_votes().to_string().bright_green(),
        election.seats
    );
    println!(
        "⚙️  First divisor {}, margins up to {} seats",
        election.method.first_divisor,
        election.method.max_extra_seats.saturating_sub(1)
    );

    let allocation = election.allocate()?;
    print_seat_table(&generate_election_report(&election, &allocation));

    println!("✅ {}", "Election file is valid".bright_green());
    Ok(())
}
