use crate::dataset::YearBuckets;
use chrono::NaiveDate;
use rand::Rng;

/// Random counts in `0..=max_count` for every day from `start` through
/// `today` inclusive. Empty when `today` precedes `start`.
pub fn synthetic_buckets<R: Rng>(
    start: NaiveDate,
    today: NaiveDate,
    max_count: u32,
    rng: &mut R,
) -> YearBuckets {
    let mut buckets = YearBuckets::new();
    for day in start.iter_days().take_while(|d| *d <= today) {
        buckets.insert(day, rng.gen_range(0..=max_count));
    }
    log::debug!(
        "[synth] generated {} days from {} to {}",
        buckets.day_count(),
        start,
        today
    );
    buckets
}
