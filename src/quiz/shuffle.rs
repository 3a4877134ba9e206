use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn time_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(nanos)
}

/// Swaps every slot with a slot drawn from the whole slice.
/// This is not the textbook Fisher-Yates: `j` ranges over `[0, len)` on every step.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    for i in 0..len {
        let j = rng.gen_range(0, len);
        items.swap(i, j);
    }
}
