use super::{ElectionInfo, ElectionReport, PartyMargins, PartyResult};
use crate::apportion::Allocation;
use crate::margins::{MarginAnalyzer, MarginTable};
use crate::model::Election;
use itertools::izip;

/// Build the report for an allocation of `election`.
///
/// The allocation may use a seat count or method other than the election
/// file's; the report describes what was actually allocated.
pub fn generate_election_report(election: &Election, allocation: &Allocation) -> ElectionReport {
    let analyzer = MarginAnalyzer::new(allocation);
    let total_votes = allocation.tally().total();
    let num_seats = allocation.num_seats();

    let info = ElectionInfo {
        name: election.name.clone(),
        seats: num_seats,
        first_divisor: allocation.config().first_divisor,
        max_extra_seats: allocation.max_extra_seats(),
        total_votes,
    };

    let parties = izip!(&election.parties, &election.colors, allocation.tally().votes())
        .enumerate()
        .map(|(party, (name, color, &votes))| PartyResult {
            name: name.clone(),
            color: color.clone(),
            votes,
            seats: allocation.seats(party),
            seat_share: percent(allocation.seats(party) as f64, num_seats as f64),
            vote_share: percent(votes as f64, total_votes as f64),
            last_quotient: allocation.last_quotient(party),
        })
        .collect();

    ElectionReport {
        info,
        parties,
        gain_margins: party_margins(election, &analyzer.gain_table()),
        loss_margins: party_margins(election, &analyzer.loss_table()),
    }
}

fn party_margins(election: &Election, table: &MarginTable) -> Vec<PartyMargins> {
    election
        .parties
        .iter()
        .zip(table.rows())
        .map(|(name, row)| PartyMargins {
            name: name.clone(),
            votes: row.clone(),
        })
        .collect()
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
