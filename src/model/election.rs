use crate::apportion::{Allocation, PartyLabels, SeatAllocator, VoteTally};
use crate::config::MethodConfig;
use crate::error::AllocationError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed election file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),
    #[error("No party named {0}")]
    UnknownParty(String),
    #[error("Changing {party} by {delta} votes leaves no valid total (has {votes})")]
    InvalidVoteChange { party: String, votes: u64, delta: i64 },
}

pub type Result<T> = std::result::Result<T, ElectionError>;

/// Vote totals and presentation metadata for one election
///
/// `parties`, `colors` and `votes` are parallel arrays in the file format;
/// their lengths are cross-checked when the election is allocated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    pub name: String,
    pub seats: usize,
    pub parties: Vec<String>,
    pub colors: Vec<String>,
    pub votes: Vec<u64>,
    #[serde(default)]
    pub method: MethodConfig,
}

impl Election {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn tally(&self) -> VoteTally {
        VoteTally::new(self.votes.clone())
    }

    pub fn labels(&self) -> PartyLabels<'_> {
        PartyLabels {
            names: &self.parties,
            colors: &self.colors,
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.tally().total()
    }

    pub fn party_index(&self, name: &str) -> Result<usize> {
        self.parties
            .iter()
            .position(|p| p.eq_ignore_ascii_case(name))
            .ok_or_else(|| ElectionError::UnknownParty(name.to_string()))
    }

    /// Allocate this election's seats with its own method parameters.
    pub fn allocate(&self) -> Result<Allocation> {
        self.allocate_with(self.seats, &self.method)
    }

    pub fn allocate_with(&self, seats: usize, method: &MethodConfig) -> Result<Allocation> {
        let allocation =
            SeatAllocator::new(seats, *method).allocate_labelled(&self.tally(), self.labels())?;
        Ok(allocation)
    }

    /// Vote total of the named party after a signed change.
    pub fn changed_votes(&self, party: usize, delta: i64) -> Result<u64> {
        self.labels().check(self.votes.len())?;
        let votes = *self
            .votes
            .get(party)
            .ok_or(AllocationError::UnknownParty {
                party,
                parties: self.votes.len(),
            })?;
        votes
            .checked_add_signed(delta)
            .ok_or_else(|| ElectionError::InvalidVoteChange {
                party: self.parties[party].clone(),
                votes,
                delta,
            })
    }
}
