use serde::{Deserialize, Serialize};

pub mod generator;
pub mod text;

pub use generator::generate_election_report;

/// Full allocation report, the hand-off to charting and publishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionReport {
    pub info: ElectionInfo,
    pub parties: Vec<PartyResult>,
    #[serde(rename = "gainMargins")]
    pub gain_margins: Vec<PartyMargins>,
    #[serde(rename = "lossMargins")]
    pub loss_margins: Vec<PartyMargins>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionInfo {
    pub name: String,
    pub seats: usize,
    #[serde(rename = "firstDivisor")]
    pub first_divisor: f64,
    #[serde(rename = "maxExtraSeats")]
    pub max_extra_seats: usize,
    #[serde(rename = "totalVotes")]
    pub total_votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyResult {
    pub name: String,
    pub color: String,
    pub votes: u64,
    pub seats: usize,
    /// Percent of all seats.
    #[serde(rename = "seatShare")]
    pub seat_share: f64,
    /// Percent of all votes.
    #[serde(rename = "voteShare")]
    pub vote_share: f64,
    /// Quotient that won the party's last seat.
    #[serde(rename = "lastQuotient")]
    pub last_quotient: Option<f64>,
}

/// One party's row of a margin table; entry `n - 1` is the margin for `n` seats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyMargins {
    pub name: String,
    pub votes: Vec<Option<u64>>,
}
