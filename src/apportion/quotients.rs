use super::divisors::DivisorSequence;
use crate::error::{AllocationError, Result};

/// Vote totals indexed by party position
///
/// Position is the identity used to break ties, not a ranking by size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    votes: Vec<u64>,
}

impl VoteTally {
    pub fn new(votes: impl Into<Vec<u64>>) -> Self {
        Self {
            votes: votes.into(),
        }
    }

    pub fn num_parties(&self) -> usize {
        self.votes.len()
    }

    pub fn get(&self, party: usize) -> u64 {
        self.votes[party]
    }

    pub fn votes(&self) -> &[u64] {
        &self.votes
    }

    /// Sum of all votes, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.votes
            .iter()
            .fold(0u64, |total, &votes| total.saturating_add(votes))
    }

    /// Copy of this tally with one party's total replaced.
    pub fn with_votes(&self, party: usize, votes: u64) -> Self {
        let mut copy = self.clone();
        copy.votes[party] = votes;
        copy
    }
}

/// Presentation labels supplied alongside a tally, checked for length only
#[derive(Debug, Clone, Copy)]
pub struct PartyLabels<'a> {
    pub names: &'a [String],
    pub colors: &'a [String],
}

impl PartyLabels<'_> {
    pub fn check(&self, parties: usize) -> Result<()> {
        for (field, len) in [("party names", self.names.len()), ("party colors", self.colors.len())] {
            if len != parties {
                return Err(AllocationError::LabelLengthMismatch {
                    field,
                    len,
                    parties,
                });
            }
        }
        Ok(())
    }
}

/// Quotient of a vote total and a divisor. Every quotient in the crate goes
/// through here so that what-if comparisons reproduce matrix values exactly.
#[inline]
pub fn quotient(votes: u64, divisor: f64) -> f64 {
    votes as f64 / divisor
}

/// Row-major P×L matrix of `votes[p] / divisors[r]`
#[derive(Debug, Clone, PartialEq)]
pub struct QuotientMatrix {
    values: Vec<f64>,
    num_parties: usize,
    num_ranks: usize,
}

impl QuotientMatrix {
    pub fn build(tally: &VoteTally, divisors: &DivisorSequence) -> Self {
        let num_ranks = divisors.len();
        let values = tally
            .votes()
            .iter()
            .flat_map(|&votes| divisors.as_slice().iter().map(move |&d| quotient(votes, d)))
            .collect();

        Self {
            values,
            num_parties: tally.num_parties(),
            num_ranks,
        }
    }

    /// Build the matrix after checking that the caller's labels line up with
    /// the tally.
    pub fn build_labelled(
        tally: &VoteTally,
        divisors: &DivisorSequence,
        labels: PartyLabels<'_>,
    ) -> Result<Self> {
        labels.check(tally.num_parties())?;
        Ok(Self::build(tally, divisors))
    }

    pub fn num_parties(&self) -> usize {
        self.num_parties
    }

    pub fn num_ranks(&self) -> usize {
        self.num_ranks
    }

    pub fn get(&self, party: usize, rank: usize) -> f64 {
        self.values[party * self.num_ranks + rank]
    }

    /// Successive claims of one party, strongest first.
    pub fn row(&self, party: usize) -> &[f64] {
        let start = party * self.num_ranks;
        &self.values[start..start + self.num_ranks]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{}", i)).collect()
    }

    #[test]
    fn quotients_divide_votes_by_divisors() {
        let tally = VoteTally::new(vec![100, 80, 30]);
        let divisors = DivisorSequence::sainte_lague(4, 1, 1.4).unwrap();
        let matrix = QuotientMatrix::build(&tally, &divisors);

        assert_eq!(matrix.num_parties(), 3);
        assert_eq!(matrix.num_ranks(), 5);
        assert_eq!(matrix.get(0, 0), 100.0 / 1.4);
        assert_eq!(matrix.get(1, 1), 80.0 / 3.0);
        assert_eq!(matrix.row(2), [30.0 / 1.4, 10.0, 6.0, 30.0 / 7.0, 30.0 / 9.0]);
    }

    #[test]
    fn zero_votes_give_zero_quotients() {
        let tally = VoteTally::new(vec![0, 10]);
        let divisors = DivisorSequence::sainte_lague(2, 2, 1.2).unwrap();
        let matrix = QuotientMatrix::build(&tally, &divisors);
        assert!(matrix.row(0).iter().all(|&q| q == 0.0));
    }

    #[test]
    fn labels_must_match_party_count() {
        let tally = VoteTally::new(vec![1, 2, 3]);
        let divisors = DivisorSequence::sainte_lague(2, 1, 1.2).unwrap();
        let names = labels(3);
        let colors = labels(2);

        let err = QuotientMatrix::build_labelled(
            &tally,
            &divisors,
            PartyLabels {
                names: &names,
                colors: &colors,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            AllocationError::LabelLengthMismatch {
                field: "party colors",
                len: 2,
                parties: 3
            }
        );

        let colors = labels(3);
        assert!(QuotientMatrix::build_labelled(
            &tally,
            &divisors,
            PartyLabels {
                names: &names,
                colors: &colors,
            },
        )
        .is_ok());
    }

    #[test]
    fn with_votes_copies_the_tally() {
        let tally = VoteTally::new(vec![5, 6]);
        let changed = tally.with_votes(1, 60);
        assert_eq!(tally.votes(), [5, 6]);
        assert_eq!(changed.votes(), [5, 60]);
        assert_eq!(changed.total(), 65);
    }

    #[test]
    fn total_saturates_on_extreme_tallies() {
        let tally = VoteTally::new(vec![u64::MAX, 5, 1]);
        assert_eq!(tally.total(), u64::MAX);
    }
}
