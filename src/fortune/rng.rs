//! Mulberry32: the deterministic stream behind every reading.
//!
//! A reading must be reproducible down to the last bit, so this module
//! deliberately avoids the `rand` ecosystem and implements the exact 32-bit
//! generator the card format was defined against. Every wraparound add,
//! multiply and shift below is part of the output contract: changing any of
//! them silently reshuffles all published cards.
//!
//! The generator is tiny (one `u32` of state), never blocks and never fails.
//! Each call advances the state by exactly one step and yields an `f64` in
//! `[0, 1)` with 32 bits of resolution.

/// One deterministic draw stream, seeded from hashed input fields.
///
/// ```
/// use fortunecast::fortune::rng::Mulberry32;
///
/// let mut a = Mulberry32::new(7);
/// let mut b = Mulberry32::new(7);
/// assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
/// ```
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream one step and return a draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_stream_for_seed_one() {
        // Snapshot of the first draws for seed 1; guards the bit recipe.
        let mut rng = Mulberry32::new(1);
        assert_eq!(rng.next_f64(), 0.6270739405881613);
        assert_eq!(rng.next_f64(), 0.002735721180215478);
        assert_eq!(rng.next_f64(), 0.5274470399599522);
        assert_eq!(rng.next_f64(), 0.9810509674716741);
    }

    #[test]
    fn known_first_draw_for_edge_seeds() {
        assert_eq!(Mulberry32::new(0).next_f64(), 0.26642920868471265);
        assert_eq!(Mulberry32::new(0xDEAD_BEEF).next_f64(), 0.9413696140982211);
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        for seed in [0u32, 1, 42, 0xFFFF_FFFF, 0x8000_0000] {
            let mut rng = Mulberry32::new(seed);
            for _ in 0..10_000 {
                let d = rng.next_f64();
                assert!((0.0..1.0).contains(&d), "draw {} out of range for seed {}", d, seed);
            }
        }
    }

    #[test]
    fn identical_seeds_identical_streams() {
        let mut a = Mulberry32::new(123_456_789);
        let mut b = Mulberry32::new(123_456_789);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let same = (0..16).filter(|_| a.next_f64() == b.next_f64()).count();
        assert!(same < 16, "adjacent seeds should not produce identical streams");
    }
}
