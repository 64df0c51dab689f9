use rand::Rng;

/// Smallest number the player may guess.
pub const MIN_GUESS: u8 = 1;
/// Largest number the player may guess.
pub const MAX_GUESS: u8 = 100;

/// Draw a target uniformly from `MIN_GUESS..=MAX_GUESS`.
pub fn new_target<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(MIN_GUESS..=MAX_GUESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_target_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let target = new_target(&mut rng);
            assert!((MIN_GUESS..=MAX_GUESS).contains(&target));
        }
    }

    #[test]
    fn test_new_target_reaches_both_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<u8> = (0..20_000).map(|_| new_target(&mut rng)).collect();

        assert!(draws.contains(&MIN_GUESS));
        assert!(draws.contains(&MAX_GUESS));
    }
}
