//! Terminal rendering of an [`ElectionReport`].

use super::{ElectionReport, PartyMargins, PartyResult};
use crate::util::parse_hex_color;
use colored::*;

/// Party name painted in its own color, falling back to plain bold text.
fn party_label(name: &str, color: &str) -> ColoredString {
    match parse_hex_color(color) {
        Some((r, g, b)) => name.truecolor(r, g, b).bold(),
        None => name.bold(),
    }
}

fn color_of<'a>(report: &'a ElectionReport, name: &str) -> &'a str {
    report
        .parties
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.color.as_str())
        .unwrap_or("")
}

pub fn print_seat_table(report: &ElectionReport) {
    println!(
        "\n{} ({} seats, first divisor {})",
        report.info.name.bright_cyan().bold(),
        report.info.seats,
        report.info.first_divisor
    );
    println!("{}", "=".repeat(50).bright_cyan());
    println!("Party\tSeats\t(%Seat\t%Vote\tLast Quot)");

    for party in &report.parties {
        println!("{}", seat_row(party));
    }

    println!("{}", "-".repeat(50).bright_cyan());
    println!(
        "{}: {}",
        "Total Votes".bright_white().bold(),
        report.info.total_votes.to_string().bright_green().bold()
    );
}

fn seat_row(party: &PartyResult) -> String {
    let last_quotient = party
        .last_quotient
        .map(|q| format!("{:.2}", q))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>5}\t{:5} \t({:2.2}\t{:2.2}\t{})",
        party_label(&party.name, &party.color),
        party.seats,
        party.seat_share,
        party.vote_share,
        last_quotient
    )
}

pub fn print_gain_margins(report: &ElectionReport) {
    print_margins(report, &report.gain_margins, "Extra seats", "votes needed");
}

pub fn print_loss_margins(report: &ElectionReport) {
    print_margins(report, &report.loss_margins, "Lost seats", "lost votes needed");
}

fn print_margins(report: &ElectionReport, rows: &[PartyMargins], heading: &str, unit: &str) {
    let columns = rows.first().map(|r| r.votes.len()).unwrap_or(0);

    println!();
    for seats in 1..=columns {
        println!("{}: {}", heading.bright_white().bold(), seats);
        for row in rows {
            let cell = match row.votes[seats - 1] {
                Some(votes) => format!("{:10} {}", votes, unit),
                None => format!("{:>10}", "n/a").dimmed().to_string(),
            };
            println!("\t{:>4}: {}", party_label(&row.name, color_of(report, &row.name)), cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_row_shows_missing_quotient_as_dash() {
        colored::control::set_override(false);
        let party = PartyResult {
            name: "MP".to_string(),
            color: "#008000".to_string(),
            votes: 10,
            seats: 0,
            seat_share: 0.0,
            vote_share: 1.5,
            last_quotient: None,
        };
        let row = seat_row(&party);
        assert!(row.contains("MP"));
        assert!(row.ends_with("(0.00\t1.50\t-)"));
    }
}
