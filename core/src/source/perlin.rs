//! Bounded random-walk ("pseudo-Perlin") sequence generation.
//!
//! Produces spatially correlated integer sequences rather than independent
//! draws: each element moves at most `step` away from the previous one, the
//! walk reflects at the range boundaries, and a distance-from-center flip
//! check biases it back toward the middle over time. Not true Perlin noise,
//! but smooth enough for terrain strips, ambient parameter drift, and other
//! "wandering value" uses.

use super::rng::GameRng;

/// Direction-flip lockout after a boundary reflection, in steps.
const REFLECTION_COOLDOWN: i32 = 10;

impl GameRng {
    /// Generate a length-`count` integer sequence random-walking in `[min, max]`.
    ///
    /// The walk starts uniformly inside the range with a positive direction.
    /// Each step draws a direction-flip check whose probability grows with
    /// the distance from the range midpoint (suppressed for
    /// [`REFLECTION_COOLDOWN`] steps after a reflection), then advances by a
    /// uniform `[0, step]` increment unless a `no_step_chance` "stay" draw
    /// succeeds. A walk that reaches a boundary is clamped onto it and
    /// forced to turn around.
    ///
    /// Both checks draw every step regardless of outcome, so the engine
    /// draw count per element is fixed whenever the walk advances.
    pub fn pseudo_perlin(
        &mut self,
        min: i32,
        max: i32,
        count: usize,
        step: i32,
        no_step_chance: f64,
    ) -> Vec<i32> {
        let mut sequence = vec![0i32; count];

        let mut current = self.int_inclusive(min as f64, max as f64);
        let mut sign = 1i32;
        // Midpoint of the span, deliberately via integer division.
        let mid = ((max - min) / 2) as f64;
        let extent = mid * 2.0;
        let two_thirds = (extent + mid) / 2.0;
        let mut count_down = 0i32;

        for slot in sequence.iter_mut() {
            count_down -= 1;
            let distance_from_mid = (current as f64 - mid).abs();
            if self.chance(distance_from_mid / two_thirds) && count_down <= 0 {
                sign = -sign;
            }

            if !self.chance(no_step_chance) {
                current += self.int_inclusive(0.0, step as f64) * sign;
            }

            if current >= max {
                count_down = REFLECTION_COOLDOWN;
                current = max;
                sign = -1;
            } else if current <= min {
                count_down = REFLECTION_COOLDOWN;
                current = min;
                sign = 1;
            }

            *slot = current;
        }

        sequence
    }

    /// The same walk over index space `[0, len - 1]`, mapped through `source`.
    ///
    /// A single-element source short-circuits to a constant sequence without
    /// drawing; an empty source yields an empty vector.
    pub fn pseudo_perlin_from<T: Clone>(
        &mut self,
        source: &[T],
        count: usize,
        step: i32,
        no_step_chance: f64,
    ) -> Vec<T> {
        match source.len() {
            0 => Vec::new(),
            1 => vec![source[0].clone(); count],
            len => self
                .pseudo_perlin(0, len as i32 - 1, count, step, no_step_chance)
                .into_iter()
                .map(|index| source[index as usize].clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_stays_in_bounds() {
        let mut rng = GameRng::with_seed(42);
        let sequence = rng.pseudo_perlin(-20, 20, 500, 3, 0.1);
        assert_eq!(sequence.len(), 500);
        for &value in &sequence {
            assert!((-20..=20).contains(&value));
        }
    }

    #[test]
    fn test_consecutive_deltas_bounded_by_step() {
        let mut rng = GameRng::with_seed(42);
        let step = 4;
        let sequence = rng.pseudo_perlin(0, 100, 1000, step, 0.0);
        for window in sequence.windows(2) {
            assert!(
                (window[1] - window[0]).abs() <= step,
                "jump {} -> {} exceeds step {}",
                window[0],
                window[1],
                step
            );
        }
    }

    #[test]
    fn test_single_element_source_is_constant() {
        let mut rng = GameRng::with_seed(42);
        let sequence = rng.pseudo_perlin_from(&[9], 50, 2, 0.0);
        assert_eq!(sequence, vec![9; 50]);
    }

    #[test]
    fn test_empty_source_yields_empty_sequence() {
        let mut rng = GameRng::with_seed(42);
        let empty: [u8; 0] = [];
        assert!(rng.pseudo_perlin_from(&empty, 50, 2, 0.0).is_empty());
    }

    #[test]
    fn test_mapped_walk_draws_from_alphabet() {
        let mut rng = GameRng::with_seed(42);
        let alphabet = ['a', 'b', 'c', 'd', 'e'];
        let sequence = rng.pseudo_perlin_from(&alphabet, 200, 1, 0.0);
        for symbol in sequence {
            assert!(alphabet.contains(&symbol));
        }
    }
}
