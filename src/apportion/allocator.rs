use super::divisors::DivisorSequence;
use super::quotients::{PartyLabels, QuotientMatrix, VoteTally};
use super::ranking::GlobalRanking;
use crate::config::MethodConfig;
use crate::error::{AllocationError, Result};
use tracing::debug;

/// Outcome of one seat allocation, kept whole for margin analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    tally: VoteTally,
    config: MethodConfig,
    num_seats: usize,
    divisors: DivisorSequence,
    quotients: QuotientMatrix,
    ranking: GlobalRanking,
    seats_per_party: Vec<usize>,
}

/// Allocate `num_seats` seats among the parties of `votes`.
pub fn allocate_seats(votes: &[u64], num_seats: usize, config: &MethodConfig) -> Result<Allocation> {
    SeatAllocator::new(num_seats, *config).allocate(&VoteTally::new(votes))
}

/// Highest-averages allocator for a fixed seat count and method
#[derive(Debug, Clone, Copy)]
pub struct SeatAllocator {
    num_seats: usize,
    config: MethodConfig,
}

impl SeatAllocator {
    pub fn new(num_seats: usize, config: MethodConfig) -> Self {
        Self { num_seats, config }
    }

    pub fn allocate(&self, tally: &VoteTally) -> Result<Allocation> {
        let divisors = self.divisors()?;
        self.check_capacity(tally, &divisors)?;
        let quotients = QuotientMatrix::build(tally, &divisors);
        Ok(self.rank_and_award(tally.clone(), divisors, quotients))
    }

    /// Allocate after cross-checking the caller's presentation labels.
    pub fn allocate_labelled(&self, tally: &VoteTally, labels: PartyLabels<'_>) -> Result<Allocation> {
        let divisors = self.divisors()?;
        let quotients = QuotientMatrix::build_labelled(tally, &divisors, labels)?;
        self.check_capacity(tally, &divisors)?;
        Ok(self.rank_and_award(tally.clone(), divisors, quotients))
    }

    fn divisors(&self) -> Result<DivisorSequence> {
        DivisorSequence::sainte_lague(
            self.num_seats,
            self.config.max_extra_seats,
            self.config.first_divisor,
        )
    }

    fn check_capacity(&self, tally: &VoteTally, divisors: &DivisorSequence) -> Result<()> {
        let available = tally.num_parties() * divisors.len();
        if self.num_seats > available {
            return Err(AllocationError::InsufficientRanks {
                num_seats: self.num_seats,
                available,
            });
        }
        Ok(())
    }

    fn rank_and_award(
        &self,
        tally: VoteTally,
        divisors: DivisorSequence,
        quotients: QuotientMatrix,
    ) -> Allocation {
        let ranking = GlobalRanking::from_matrix(&quotients);

        let mut seats_per_party = vec![0; tally.num_parties()];
        for entry in ranking.awarded(self.num_seats) {
            seats_per_party[entry.party] += 1;
        }

        debug!(
            parties = tally.num_parties(),
            seats = self.num_seats,
            first_divisor = self.config.first_divisor,
            ?seats_per_party,
            "allocated seats"
        );

        Allocation {
            tally,
            config: self.config,
            num_seats: self.num_seats,
            divisors,
            quotients,
            ranking,
            seats_per_party,
        }
    }
}

impl Allocation {
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    pub fn config(&self) -> &MethodConfig {
        &self.config
    }

    pub fn num_seats(&self) -> usize {
        self.num_seats
    }

    pub fn num_parties(&self) -> usize {
        self.tally.num_parties()
    }

    pub fn max_extra_seats(&self) -> usize {
        self.config.max_extra_seats
    }

    pub fn divisors(&self) -> &DivisorSequence {
        &self.divisors
    }

    pub fn quotients(&self) -> &QuotientMatrix {
        &self.quotients
    }

    pub fn ranking(&self) -> &GlobalRanking {
        &self.ranking
    }

    pub fn seats_per_party(&self) -> &[usize] {
        &self.seats_per_party
    }

    pub fn seats(&self, party: usize) -> usize {
        self.seats_per_party[party]
    }

    /// Quotient of the last seat a party won, if it won any.
    pub fn last_quotient(&self, party: usize) -> Option<f64> {
        let seats = self.seats(party);
        (seats > 0).then(|| self.quotients.get(party, seats - 1))
    }

    /// Rerun the allocation with one party's vote total replaced.
    pub fn with_votes(&self, party: usize, votes: u64) -> Result<Allocation> {
        if party >= self.num_parties() {
            return Err(AllocationError::UnknownParty {
                party,
                parties: self.num_parties(),
            });
        }
        SeatAllocator::new(self.num_seats, self.config).allocate(&self.tally.with_votes(party, votes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn scenario_a() -> Allocation {
        allocate_seats(&[100, 80, 30], 4, &MethodConfig::default().with_first_divisor(1.4)).unwrap()
    }

    #[test]
    fn small_election_by_hand() {
        // 100/1.4, 80/1.4, 100/3, 80/3 beat 30/1.4 and 100/5.
        let allocation = scenario_a();
        assert_eq!(allocation.seats_per_party(), [2, 2, 0]);
        assert_eq!(allocation.divisors().len(), 10);
        assert_eq!(allocation.ranking().len(), 30);
    }

    #[test]
    fn seats_are_conserved() {
        for num_seats in 1..40 {
            let allocation = allocate_seats(&[9000, 4000, 2500, 700, 0], num_seats, &MethodConfig::default()).unwrap();
            assert_eq!(allocation.seats_per_party().iter().sum::<usize>(), num_seats);
        }
    }

    #[test]
    fn parties_win_contiguous_ranks() {
        let allocation = allocate_seats(&[41000, 39000, 12000, 8000], 25, &MethodConfig::default()).unwrap();
        for party in 0..allocation.num_parties() {
            let mut ranks: Vec<usize> = allocation
                .ranking()
                .awarded(25)
                .iter()
                .filter(|e| e.party == party)
                .map(|e| e.rank)
                .collect();
            ranks.sort_unstable();
            assert_eq!(ranks, (0..allocation.seats(party)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn zero_vote_party_wins_nothing() {
        let allocation = allocate_seats(&[0, 500, 300], 5, &MethodConfig::default()).unwrap();
        assert_eq!(allocation.seats_per_party(), [0, 3, 2]);
        assert_eq!(allocation.last_quotient(0), None);
        assert_eq!(allocation.last_quotient(1), Some(500.0 / 5.0));
    }

    #[test]
    fn equal_votes_favor_lower_party_index() {
        let allocation = allocate_seats(&[50, 50], 3, &MethodConfig::default()).unwrap();
        assert_eq!(allocation.seats_per_party(), [2, 1]);
    }

    #[test]
    fn what_if_reallocates() {
        let allocation = scenario_a();
        assert_eq!(allocation.with_votes(2, 38).unwrap().seats_per_party(), [2, 1, 1]);
        assert_eq!(allocation.with_votes(2, 37).unwrap().seats_per_party(), [2, 2, 0]);
        assert_eq!(
            allocation.with_votes(3, 1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn no_parties_is_a_capacity_error() {
        let err = allocate_seats(&[], 3, &MethodConfig::default()).unwrap_err();
        assert_eq!(
            err,
            AllocationError::InsufficientRanks {
                num_seats: 3,
                available: 0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Capacity);
    }

    #[test]
    fn label_mismatch_fails_before_allocation() {
        let names = vec!["A".to_string(), "B".to_string()];
        let colors = vec!["#ff0000".to_string()];
        let err = SeatAllocator::new(3, MethodConfig::default())
            .allocate_labelled(
                &VoteTally::new(vec![10, 20]),
                PartyLabels {
                    names: &names,
                    colors: &colors,
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
