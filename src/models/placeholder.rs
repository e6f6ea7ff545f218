use super::series::Value;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::ops::Range;

const HIGH_BAND: Range<f64> = 60.0..100.0;
const LOW_BAND: Range<f64> = 10.0..40.0;

/// Generates `count` synthetic samples for the loading animation.
///
/// Values carry no meaning. Consecutive iterations flip between two shapes
/// so the chart visibly moves while the query is pending.
pub fn generate(iteration: u32, count: usize) -> Vec<Value> {
    let now = Utc::now();
    let seed = now.timestamp_millis() as u64 ^ u64::from(iteration);
    generate_with(iteration, count, now, &mut SmallRng::seed_from_u64(seed))
}

/// Same as [`generate`] with an explicit clock and random source.
pub fn generate_with<R: Rng + ?Sized>(
    iteration: u32,
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Value> {
    (0..count)
        .map(|index| {
            let band = if is_high(iteration, index) {
                HIGH_BAND
            } else {
                LOW_BAND
            };
            Value::new(now, rng.random_range(band))
        })
        .collect()
}

/// Whether the sample at `index` is drawn from the high band on `iteration`.
pub const fn is_high(iteration: u32, index: usize) -> bool {
    (iteration % 2 == 0) == (index % 2 == 0)
}
