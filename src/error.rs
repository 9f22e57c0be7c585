/// Errors raised while allocating seats or analyzing margins
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocationError {
    #[error("number of seats must be at least 1")]
    NoSeats,
    /// The first divisor must be finite, positive and no larger than the
    /// second divisor (3). A larger value would let a party's second claim
    /// outrank its first, so ranks would no longer be won in order.
    #[error("first divisor must be finite and in (0, 3], got {first_divisor}")]
    InvalidFirstDivisor { first_divisor: f64 },
    #[error("max extra seats must be at least 1")]
    NoExtraSeats,
    #[error("{field} has {len} entries but there are {parties} parties")]
    LabelLengthMismatch {
        field: &'static str,
        len: usize,
        parties: usize,
    },
    #[error("cannot award {num_seats} seats from {available} ranked quotients")]
    InsufficientRanks { num_seats: usize, available: usize },
    #[error("margins for {requested} extra seats need ranks the allocation was built without (max {available})")]
    ExtraSeatsExceedRanks { requested: usize, available: usize },
    #[error("seat change {seats} is outside 1..={max}")]
    ExtraSeatsOutOfRange { seats: usize, max: usize },
    #[error("party index {party} is out of range for {parties} parties")]
    UnknownParty { party: usize, parties: usize },
}

/// Broad class of an [`AllocationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: bad seat count, divisor or label lengths.
    Validation,
    /// The divisor ranks cannot cover the requested seats.
    Capacity,
    /// A margin query outside the computed window.
    Range,
}

impl AllocationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AllocationError::NoSeats
            | AllocationError::InvalidFirstDivisor { .. }
            | AllocationError::NoExtraSeats
            | AllocationError::LabelLengthMismatch { .. } => ErrorKind::Validation,
            AllocationError::InsufficientRanks { .. }
            | AllocationError::ExtraSeatsExceedRanks { .. } => ErrorKind::Capacity,
            AllocationError::ExtraSeatsOutOfRange { .. } | AllocationError::UnknownParty { .. } => {
                ErrorKind::Range
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Capacity => write!(f, "capacity"),
            ErrorKind::Range => write!(f, "range"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AllocationError>;
