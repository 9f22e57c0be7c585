//! Seat allocation by the modified Sainte-Laguë method, with the vote margins
//! each party needs to gain or lose seats.

pub mod apportion;
pub mod config;
pub mod error;
pub mod margins;
pub mod model;
pub mod reports;
pub mod util;

pub use apportion::{allocate_seats, Allocation, SeatAllocator, VoteTally};
pub use config::MethodConfig;
pub use error::{AllocationError, ErrorKind, Result};
pub use margins::{compute_gain_margins, compute_loss_margins, MarginAnalyzer, MarginKind, MarginTable};
