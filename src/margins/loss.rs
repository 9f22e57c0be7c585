use super::outranks;
use crate::apportion::Allocation;
use tracing::trace;

/// Fewest lost votes for `party` to drop `seats` seats, or `None` when it
/// holds fewer seats or would keep them even at zero votes.
pub(super) fn votes_to_lose(allocation: &Allocation, party: usize, seats: usize) -> Option<u64> {
    let held = allocation.seats(party);
    if seats > held {
        return None;
    }

    // Rival claims below the cut line, best first. Falling behind one of the
    // party's own unawarded claims loses nothing.
    let rival = allocation
        .ranking()
        .unawarded(allocation.num_seats())
        .iter()
        .filter(|entry| entry.party != party)
        .nth(seats - 1)?;

    let rank = held - seats;
    let divisor = allocation.divisors().get(rank);
    let votes = allocation.tally().get(party);

    if outranks(allocation, party, rank, 0, rival) {
        return None;
    }

    let estimate = (votes as f64 - rival.quotient * divisor).ceil();
    let mut lost = if estimate > 0.0 { (estimate as u64).min(votes) } else { 0 };

    // Settle the estimate on the exact tie-broken boundary.
    while outranks(allocation, party, rank, votes - lost, rival) {
        lost += 1;
    }
    while lost > 0 && !outranks(allocation, party, rank, votes - lost + 1, rival) {
        lost -= 1;
    }

    trace!(
        party,
        seats,
        rank,
        rival_party = rival.party,
        rival_rank = rival.rank,
        lost,
        "loss margin"
    );
    Some(lost)
}
