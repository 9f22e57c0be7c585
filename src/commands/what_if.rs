use super::MethodArgs;
use colored::*;
use seat_margin::model::{Election, ElectionError};
use std::path::Path;

pub fn what_if(path: &Path, party_name: &str, delta: i64, args: &MethodArgs) -> Result<(), ElectionError> {
    let election = Election::load(path)?;
    let (seats, method) = args.resolve(&election);
    let party = election.party_index(party_name)?;
    let votes = election.changed_votes(party, delta)?;

    let before = election.allocate_with(seats, &method)?;
    let after = before.with_votes(party, votes)?;

    println!(
        "🔁 {} {} → {} votes ({:+})",
        election.parties[party].bright_yellow().bold(),
        election.votes[party],
        votes,
        delta
    );
    println!("Party\tBefore\tAfter");
    for (i, name) in election.parties.iter().enumerate() {
        let (was, now) = (before.seats(i), after.seats(i));
        let change = match now as i64 - was as i64 {
            0 => String::new(),
            d if d > 0 => format!("+{}", d).bright_green().to_string(),
            d => d.to_string().bright_red().to_string(),
        };
        println!("{:>5}\t{:5}\t{:5}\t{}", name, was, now, change);
    }

    Ok(())
}
