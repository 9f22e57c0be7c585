use serde::{Deserialize, Serialize};

pub const DEFAULT_FIRST_DIVISOR: f64 = 1.2;
pub const DEFAULT_MAX_EXTRA_SEATS: usize = 6;

/// Parameters of the modified Sainte-Laguë method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodConfig {
    /// Divisor used for every party's first seat claim.
    pub first_divisor: f64,
    /// Extra divisor ranks computed past the seat count; margin tables
    /// cover `1..max_extra_seats` seat changes.
    pub max_extra_seats: usize,
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self {
            first_divisor: DEFAULT_FIRST_DIVISOR,
            max_extra_seats: DEFAULT_MAX_EXTRA_SEATS,
        }
    }
}

impl MethodConfig {
    pub fn with_first_divisor(mut self, first_divisor: f64) -> Self {
        self.first_divisor = first_divisor;
        self
    }

    pub fn with_max_extra_seats(mut self, max_extra_seats: usize) -> Self {
        self.max_extra_seats = max_extra_seats;
        self
    }

    /// Apply overrides from the command line on top of file values.
    pub fn merged(self, first_divisor: Option<f64>, max_extra_seats: Option<usize>) -> Self {
        Self {
            first_divisor: first_divisor.unwrap_or(self.first_divisor),
            max_extra_seats: max_extra_seats.unwrap_or(self.max_extra_seats),
        }
    }
}
