use super::outranks;
use crate::apportion::Allocation;
use tracing::trace;

/// Fewest extra votes for `party` to win `seats` more seats, or `None` when
/// other parties hold fewer than `seats` seats to take or the vote total
/// needed does not fit in a `u64`.
pub(super) fn votes_to_gain(allocation: &Allocation, party: usize, seats: usize) -> Option<u64> {
    // The rival claims of other parties that currently win seats, from the
    // cut line upwards. Overtaking one of the party's own seats gains nothing.
    let rival = allocation
        .ranking()
        .awarded(allocation.num_seats())
        .iter()
        .rev()
        .filter(|entry| entry.party != party)
        .nth(seats - 1)?;

    let rank = allocation.seats(party) + seats - 1;
    let divisor = allocation.divisors().get(rank);
    let votes = allocation.tally().get(party);

    let estimate = (rival.quotient * divisor - votes as f64).ceil();
    let headroom = u64::MAX - votes;
    let mut extra = if estimate > 0.0 { (estimate as u64).min(headroom) } else { 0 };

    // Settle the estimate on the exact tie-broken boundary.
    while !outranks(allocation, party, rank, votes + extra, rival) {
        if extra == headroom {
            trace!(party, seats, rank, "gain margin exceeds representable votes");
            return None;
        }
        extra += 1;
    }
    while extra > 0 && outranks(allocation, party, rank, votes + extra - 1, rival) {
        extra -= 1;
    }

    trace!(
        party,
        seats,
        rank,
        rival_party = rival.party,
        rival_rank = rival.rank,
        extra,
        "gain margin"
    );
    Some(extra)
}
