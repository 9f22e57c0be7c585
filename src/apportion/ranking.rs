use super::quotients::QuotientMatrix;
use itertools::iproduct;
use std::cmp::Ordering;

/// A (party, divisor rank) cell of the quotient matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub party: usize,
    pub rank: usize,
}

/// A coordinate together with its quotient value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedQuotient {
    pub party: usize,
    pub rank: usize,
    pub quotient: f64,
}

impl RankedQuotient {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            party: self.party,
            rank: self.rank,
        }
    }
}

/// Order in which seats are claimed: higher quotient first, then lower
/// divisor rank, then lower party index.
///
/// `Ordering::Less` means `a` claims its seat before `b`.
pub fn claim_order(a: &RankedQuotient, b: &RankedQuotient) -> Ordering {
    b.quotient
        .total_cmp(&a.quotient)
        .then_with(|| a.rank.cmp(&b.rank))
        .then_with(|| a.party.cmp(&b.party))
}

/// Whether `a` would be awarded a seat ahead of `b`.
pub fn claims_before(a: &RankedQuotient, b: &RankedQuotient) -> bool {
    claim_order(a, b) == Ordering::Less
}

/// Every matrix coordinate in claim order
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalRanking {
    entries: Vec<RankedQuotient>,
}

impl GlobalRanking {
    pub fn from_matrix(matrix: &QuotientMatrix) -> Self {
        let mut entries: Vec<RankedQuotient> =
            iproduct!(0..matrix.num_parties(), 0..matrix.num_ranks())
                .map(|(party, rank)| RankedQuotient {
                    party,
                    rank,
                    quotient: matrix.get(party, rank),
                })
                .collect();

        // The comparator is total over distinct coordinates, so an unstable
        // sort is still deterministic.
        entries.sort_unstable_by(claim_order);

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RankedQuotient> {
        self.entries.get(position)
    }

    pub fn entries(&self) -> &[RankedQuotient] {
        &self.entries
    }

    /// Entries awarded a seat when `num_seats` seats are handed out.
    pub fn awarded(&self, num_seats: usize) -> &[RankedQuotient] {
        &self.entries[..num_seats.min(self.entries.len())]
    }

    /// Entries just below the cut line, best first.
    pub fn unawarded(&self, num_seats: usize) -> &[RankedQuotient] {
        &self.entries[num_seats.min(self.entries.len())..]
    }
}
