use crate::error::{AllocationError, Result};

/// Highest allowed first divisor. Above the second divisor a party's second
/// claim would outrank its first.
pub const MAX_FIRST_DIVISOR: f64 = 3.0;

/// Ordered divisors for successive seat claims: `first_divisor, 3, 5, 7, ...`
#[derive(Debug, Clone, PartialEq)]
pub struct DivisorSequence {
    values: Vec<f64>,
}

impl DivisorSequence {
    /// Build `num_seats + max_extra_seats` Sainte-Laguë divisors with a
    /// modified first divisor.
    ///
    /// `first_divisor` must lie in `(0, 3]`; see
    /// [`AllocationError::InvalidFirstDivisor`].
    pub fn sainte_lague(
        num_seats: usize,
        max_extra_seats: usize,
        first_divisor: f64,
    ) -> Result<Self> {
        if num_seats == 0 {
            return Err(AllocationError::NoSeats);
        }
        if max_extra_seats == 0 {
            return Err(AllocationError::NoExtraSeats);
        }
        if !first_divisor.is_finite() || first_divisor <= 0.0 || first_divisor > MAX_FIRST_DIVISOR
        {
            return Err(AllocationError::InvalidFirstDivisor { first_divisor });
        }

        let values = (0..num_seats + max_extra_seats)
            .map(|rank| {
                if rank == 0 {
                    first_divisor
                } else {
                    (2 * rank + 1) as f64
                }
            })
            .collect();

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Divisor for the claim at `rank` (0-indexed).
    pub fn get(&self, rank: usize) -> f64 {
        self.values[rank]
    }

    pub fn first_divisor(&self) -> f64 {
        self.values[0]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_covers_extra_seats() {
        let divisors = DivisorSequence::sainte_lague(4, 6, 1.4).unwrap();
        assert_eq!(divisors.len(), 10);
        assert_eq!(divisors.as_slice()[..4], [1.4, 3.0, 5.0, 7.0]);
        assert_eq!(divisors.get(9), 19.0);
    }

    #[test]
    fn strictly_increasing_after_first() {
        let divisors = DivisorSequence::sainte_lague(349, 6, 1.2).unwrap();
        assert_eq!(divisors.first_divisor(), 1.2);
        assert!(divisors.as_slice()[1..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unmodified_first_divisor_is_allowed() {
        let divisors = DivisorSequence::sainte_lague(1, 1, 1.0).unwrap();
        assert_eq!(divisors.as_slice(), [1.0, 3.0]);
    }

    #[test]
    fn first_divisor_may_equal_second() {
        let divisors = DivisorSequence::sainte_lague(2, 1, MAX_FIRST_DIVISOR).unwrap();
        assert_eq!(divisors.as_slice(), [3.0, 3.0, 5.0]);
        assert!(matches!(
            DivisorSequence::sainte_lague(2, 1, 3.000001),
            Err(AllocationError::InvalidFirstDivisor { first_divisor }) if first_divisor > 3.0
        ));
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            DivisorSequence::sainte_lague(0, 6, 1.2),
            Err(AllocationError::NoSeats)
        );
        assert_eq!(
            DivisorSequence::sainte_lague(10, 0, 1.2),
            Err(AllocationError::NoExtraSeats)
        );
        for first_divisor in [0.0, -1.0, 3.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DivisorSequence::sainte_lague(10, 6, first_divisor),
                Err(AllocationError::InvalidFirstDivisor { .. })
            ));
        }
    }
}
