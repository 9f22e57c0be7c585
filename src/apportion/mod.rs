//! Modified Sainte-Laguë seat allocation.
//!
//! Votes are divided by a divisor sequence into a quotient matrix, every
//! (party, rank) cell is ranked globally, and the top `num_seats` cells win.

pub mod allocator;
pub mod divisors;
pub mod quotients;
pub mod ranking;

pub use allocator::{allocate_seats, Allocation, SeatAllocator};
pub use divisors::DivisorSequence;
pub use quotients::{PartyLabels, QuotientMatrix, VoteTally};
pub use ranking::{claim_order, Coordinate, GlobalRanking, RankedQuotient};
