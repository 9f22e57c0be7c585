#![allow(dead_code)]

/// Seat-by-seat highest averages, independent of the global ranking.
///
/// Each seat goes to the party with the largest next quotient; ties go to
/// the party claiming a lower rank, then to the lower party index.
pub fn sequential_allocation(votes: &[u64], num_seats: usize, first_divisor: f64) -> Vec<usize> {
    let divisor = |rank: usize| {
        if rank == 0 {
            first_divisor
        } else {
            (2 * rank + 1) as f64
        }
    };

    let mut seats = vec![0usize; votes.len()];
    for _ in 0..num_seats {
        let mut best: Option<(usize, f64)> = None;
        for (party, &v) in votes.iter().enumerate() {
            let q = v as f64 / divisor(seats[party]);
            let better = match best {
                None => true,
                Some((b, bq)) => q > bq || (q == bq && seats[party] < seats[b]),
            };
            if better {
                best = Some((party, q));
            }
        }
        if let Some((party, _)) = best {
            seats[party] += 1;
        }
    }
    seats
}

pub const SWEDEN_2018: [u64; 8] = [1284698, 557500, 355546, 409478, 1830386, 518454, 285899, 1135627];
