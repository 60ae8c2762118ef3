//! Complaint identifier generation.
//!
//! Format: `CMP-{epoch_millis}-{random 0..9999}`. Uniqueness rests on the
//! timestamp plus the random suffix; there is no collision check against
//! existing records. Two calls in the same millisecond collide only if the
//! random component also matches.

use crate::types::ComplaintId;
use chrono::Utc;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct ComplaintIdGenerator {
    rng: Pcg64Mcg,
}

impl ComplaintIdGenerator {
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Seeded stream for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> ComplaintId {
        self.generate_at(Utc::now().timestamp_millis())
    }

    /// Generate with an injected timestamp. Used in tests.
    pub fn generate_at(&mut self, epoch_millis: i64) -> ComplaintId {
        let random = self.rng.next_u64() % 10_000;
        format!("CMP-{epoch_millis}-{random}")
    }
}

impl Default for ComplaintIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_format(id: &str) -> bool {
        // CMP-<digits>-<1..4 digits>
        let mut parts = id.splitn(3, '-');
        parts.next() == Some("CMP")
            && parts
                .next()
                .is_some_and(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
            && parts
                .next()
                .is_some_and(|r| (1..=4).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_digit()))
    }

    #[test]
    fn generated_ids_match_format() {
        let mut ids = ComplaintIdGenerator::with_seed(42);
        for _ in 0..100 {
            let id = ids.generate();
            assert!(matches_format(&id), "bad id format: {id}");
        }
    }

    #[test]
    fn random_suffix_stays_below_10000() {
        let mut ids = ComplaintIdGenerator::with_seed(7);
        for _ in 0..1000 {
            let id = ids.generate_at(1_700_000_000_000);
            let suffix: u64 = id.rsplit('-').next().unwrap().parse().unwrap();
            assert!(suffix < 10_000, "suffix out of range in {id}");
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = ComplaintIdGenerator::with_seed(99);
        let mut b = ComplaintIdGenerator::with_seed(99);
        assert_eq!(a.generate_at(1_000), b.generate_at(1_000));
    }
}
