mod allocate;
mod info;
mod what_if;

pub use allocate::allocate;
pub use info::info;
pub use what_if::what_if;

use clap::Args;
use seat_margin::model::Election;
use seat_margin::MethodConfig;

/// Method overrides shared by commands that allocate
#[derive(Args, Debug, Default)]
pub struct MethodArgs {
    /// Number of seats (defaults to the election file's).
    #[clap(long)]
    pub seats: Option<usize>,
    /// Divisor for each party's first seat.
    #[clap(long)]
    pub first_divisor: Option<f64>,
    /// Extra divisor ranks; margins cover 1..max-extra-seats seats.
    #[clap(long)]
    pub max_extra_seats: Option<usize>,
}

impl MethodArgs {
    fn resolve(&self, election: &Election) -> (usize, MethodConfig) {
        let seats = self.seats.unwrap_or(election.seats);
        let method = election
            .method
            .merged(self.first_divisor, self.max_extra_seats);
        (seats, method)
    }
}
