//! Vote margins for gaining or losing seats.
//!
//! Each party is analyzed on its own: its vote total is the only variable,
//! every other coordinate of the global ranking stays where it is. A margin
//! is therefore found by walking the ranking from the cut line, skipping the
//! party's own entries, to the rival claim it must overtake (or fall behind),
//! and solving for the vote total at which the party's claim at the matching
//! divisor rank crosses it.

mod gain;
mod loss;

use crate::apportion::{Allocation, RankedQuotient};
use crate::apportion::quotients::quotient;
use crate::apportion::ranking::claims_before;
use crate::error::{AllocationError, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginKind {
    Gain,
    Loss,
}

impl fmt::Display for MarginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginKind::Gain => write!(f, "gain"),
            MarginKind::Loss => write!(f, "loss"),
        }
    }
}

/// Minimum vote changes per party and seat change
///
/// `rows[p][n - 1]` holds the margin for a change of `n` seats. `None` marks
/// a change no vote total can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarginTable {
    kind: MarginKind,
    max_extra_seats: usize,
    rows: Vec<Vec<Option<u64>>>,
}

impl MarginTable {
    pub fn kind(&self) -> MarginKind {
        self.kind
    }

    pub fn num_parties(&self) -> usize {
        self.rows.len()
    }

    /// Seat changes covered, `1..=max_seat_change()`.
    pub fn max_seat_change(&self) -> usize {
        self.max_extra_seats - 1
    }

    pub fn rows(&self) -> &[Vec<Option<u64>>] {
        &self.rows
    }

    pub fn row(&self, party: usize) -> Result<&[Option<u64>]> {
        self.rows
            .get(party)
            .map(Vec::as_slice)
            .ok_or(AllocationError::UnknownParty {
                party,
                parties: self.rows.len(),
            })
    }

    pub fn get(&self, party: usize, seats: usize) -> Result<Option<u64>> {
        let row = self.row(party)?;
        check_seat_change(seats, self.max_extra_seats)?;
        Ok(row[seats - 1])
    }
}

/// Margin queries against one allocation
#[derive(Debug, Clone, Copy)]
pub struct MarginAnalyzer<'a> {
    allocation: &'a Allocation,
}

impl<'a> MarginAnalyzer<'a> {
    pub fn new(allocation: &'a Allocation) -> Self {
        Self { allocation }
    }

    /// Fewest extra votes for `party` to end with exactly `seats` more seats.
    pub fn gain(&self, party: usize, seats: usize) -> Result<Option<u64>> {
        self.check_query(party, seats)?;
        Ok(gain::votes_to_gain(self.allocation, party, seats))
    }

    /// Fewest lost votes for `party` to end with `seats` fewer seats.
    pub fn loss(&self, party: usize, seats: usize) -> Result<Option<u64>> {
        self.check_query(party, seats)?;
        Ok(loss::votes_to_lose(self.allocation, party, seats))
    }

    pub fn gain_table(&self) -> MarginTable {
        self.table(MarginKind::Gain, self.allocation.max_extra_seats())
    }

    pub fn loss_table(&self) -> MarginTable {
        self.table(MarginKind::Loss, self.allocation.max_extra_seats())
    }

    fn check_query(&self, party: usize, seats: usize) -> Result<()> {
        let parties = self.allocation.num_parties();
        if party >= parties {
            return Err(AllocationError::UnknownParty { party, parties });
        }
        check_seat_change(seats, self.allocation.max_extra_seats())
    }

    fn table(&self, kind: MarginKind, max_extra_seats: usize) -> MarginTable {
        let allocation = self.allocation;
        let rows = (0..allocation.num_parties())
            .into_par_iter()
            .map(|party| {
                (1..max_extra_seats)
                    .map(|seats| match kind {
                        MarginKind::Gain => gain::votes_to_gain(allocation, party, seats),
                        MarginKind::Loss => loss::votes_to_lose(allocation, party, seats),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        MarginTable {
            kind,
            max_extra_seats,
            rows,
        }
    }
}

/// Gain margins for every party and `1..max_extra_seats` extra seats.
pub fn compute_gain_margins(allocation: &Allocation, max_extra_seats: usize) -> Result<MarginTable> {
    check_window(allocation, max_extra_seats)?;
    Ok(MarginAnalyzer::new(allocation).table(MarginKind::Gain, max_extra_seats))
}

/// Loss margins for every party and `1..max_extra_seats` lost seats.
pub fn compute_loss_margins(allocation: &Allocation, max_extra_seats: usize) -> Result<MarginTable> {
    check_window(allocation, max_extra_seats)?;
    Ok(MarginAnalyzer::new(allocation).table(MarginKind::Loss, max_extra_seats))
}

fn check_window(allocation: &Allocation, max_extra_seats: usize) -> Result<()> {
    if max_extra_seats == 0 {
        return Err(AllocationError::NoExtraSeats);
    }
    if max_extra_seats > allocation.max_extra_seats() {
        return Err(AllocationError::ExtraSeatsExceedRanks {
            requested: max_extra_seats,
            available: allocation.max_extra_seats(),
        });
    }
    Ok(())
}

fn check_seat_change(seats: usize, max_extra_seats: usize) -> Result<()> {
    let max = max_extra_seats.saturating_sub(1);
    if seats == 0 || seats > max {
        return Err(AllocationError::ExtraSeatsOutOfRange { seats, max });
    }
    Ok(())
}

/// The claim `party` would make at `rank` with `votes` votes.
fn claim(allocation: &Allocation, party: usize, rank: usize, votes: u64) -> RankedQuotient {
    RankedQuotient {
        party,
        rank,
        quotient: quotient(votes, allocation.divisors().get(rank)),
    }
}

/// Whether `party` with `votes` votes claims `rank` ahead of `rival`.
fn outranks(allocation: &Allocation, party: usize, rank: usize, votes: u64, rival: &RankedQuotient) -> bool {
    claims_before(&claim(allocation, party, rank, votes), rival)
}
