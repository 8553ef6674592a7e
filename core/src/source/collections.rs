//! Collection sampling: shuffles, picks, weighted choice, enum sampling.

use strum::IntoEnumIterator;

use super::rng::GameRng;

impl GameRng {
    /// Shuffle a slice in place in O(n) with Fisher–Yates/Knuth.
    ///
    /// Iterates forward, swapping each position with a uniformly chosen
    /// earlier-or-equal position. Unbiased.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in 0..items.len() {
            let j = self.int_in(0, i as i32 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Uniform pick from a slice; `None` when it is empty.
    pub fn pick<'a, T>(&mut self, source: &'a [T]) -> Option<&'a T> {
        if source.is_empty() {
            return None;
        }
        let index = self.int_in(0, source.len() as i32) as usize;
        Some(&source[index])
    }

    /// Uniform pick avoiding `exclude`, with bounded redraws.
    ///
    /// Redraws until a non-excluded value is found or the generator's
    /// [`exclusion_retry_limit`](Self::exclusion_retry_limit) is exhausted,
    /// at which point the last-drawn value is returned even if excluded.
    /// Callers who need a guaranteed non-excluded value must ensure the
    /// exclusion set does not cover the source.
    pub fn pick_excluding<'a, T: PartialEq>(
        &mut self,
        source: &'a [T],
        exclude: &[T],
    ) -> Option<&'a T> {
        if source.is_empty() {
            return None;
        }
        let mut choice = &source[self.int_in(0, source.len() as i32) as usize];
        let mut tries = 0;
        while exclude.contains(choice) && tries < self.exclusion_retry_limit() {
            choice = &source[self.int_in(0, source.len() as i32) as usize];
            tries += 1;
        }
        Some(choice)
    }

    /// Pick biased toward the element whose normalized index equals `mean`.
    pub fn gaussian_pick<'a, T>(&mut self, source: &'a [T], mean: f64) -> Option<&'a T> {
        if source.is_empty() {
            return None;
        }
        let index = self.gaussian_int(0, source.len() as i32 - 1, mean) as usize;
        Some(&source[index])
    }

    /// Draw `count` elements with replacement.
    ///
    /// With `try_distinct`, duplicates already in the result are rejected
    /// for up to `count²` retries per slot, then accepted anyway. Distinctness
    /// is best-effort, not a guarantee.
    pub fn sample<T: Clone + PartialEq>(
        &mut self,
        source: &[T],
        count: usize,
        try_distinct: bool,
    ) -> Vec<T> {
        if source.is_empty() {
            return Vec::new();
        }
        let max_tries = count * count;
        let mut result = Vec::with_capacity(count);
        for _ in 0..count {
            let mut item = source[self.int_in(0, source.len() as i32) as usize].clone();
            let mut tries = 0;
            while try_distinct && result.contains(&item) && tries < max_tries {
                tries += 1;
                item = source[self.int_in(0, source.len() as i32) as usize].clone();
            }
            result.push(item);
        }
        result
    }

    /// Draw `count` elements, each index biased toward `mean` as in
    /// [`gaussian_pick`](Self::gaussian_pick). Always with replacement.
    pub fn gaussian_sample<T: Clone>(&mut self, source: &[T], count: usize, mean: f64) -> Vec<T> {
        if source.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| source[self.gaussian_int(0, source.len() as i32 - 1, mean) as usize].clone())
            .collect()
    }

    /// Weighted discrete choice over `values`.
    ///
    /// Weights are relative likelihoods; they are normalized into an internal
    /// cumulative buffer, so the caller's slice is never mutated. The first
    /// bucket whose cumulative weight reaches the drawn probability and whose
    /// raw weight is non-zero wins. Degenerate weight vectors (all zero,
    /// NaN sums) fall back to a uniform pick.
    pub fn pick_weighted<'a, T>(&mut self, values: &'a [T], weights: &[f64]) -> Option<&'a T> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = weights.iter().sum();
        let pick = self.probability();

        let mut cumulative = 0.0;
        for (index, &weight) in weights.iter().take(values.len()).enumerate() {
            cumulative += weight / sum;
            if weight != 0.0 && pick <= cumulative {
                return Some(&values[index]);
            }
        }
        self.pick(values)
    }

    /// Return `a` with probability `chance_a`, else `b`.
    pub fn decide<T>(&mut self, a: T, b: T, chance_a: f64) -> T {
        if self.chance(chance_a) {
            a
        } else {
            b
        }
    }

    /// Return the two values in random order.
    pub fn shuffle_pair<T>(&mut self, a: T, b: T) -> (T, T) {
        if self.flip_coin() {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Uniform pick over an enum's value set.
    pub fn pick_enum<T: IntoEnumIterator>(&mut self) -> Option<T> {
        let count = T::iter().count();
        if count == 0 {
            return None;
        }
        let index = self.int_in(0, i32::MAX) as usize % count;
        T::iter().nth(index)
    }

    /// Uniform pick over an enum's value set minus `negate`.
    ///
    /// Exclusion is built by filtering, not retrying; `None` when everything
    /// is negated.
    pub fn pick_enum_excluding<T>(&mut self, negate: &[T]) -> Option<T>
    where
        T: IntoEnumIterator + PartialEq,
    {
        let remaining: Vec<T> = T::iter().filter(|value| !negate.contains(value)).collect();
        if remaining.is_empty() {
            return None;
        }
        let index = self.int_in(0, remaining.len() as i32) as usize;
        remaining.into_iter().nth(index)
    }

    /// Gaussian-biased pick over an enum's value set.
    ///
    /// With no pivot, applies a fixed small bias toward low-index variants
    /// (mean drawn from `[0, 0.15)`). With a pivot, centers a ±0.5 window
    /// around it before the biased index selection. Either way the index is
    /// clamped into range.
    pub fn gaussian_enum<T: IntoEnumIterator>(&mut self, pivot: Option<f64>) -> Option<T> {
        let count = T::iter().count();
        if count == 0 {
            return None;
        }
        let len = count as i32;
        let index = match pivot {
            None => {
                let mean = self.float_in(0.0, 0.15);
                self.gaussian_int(0, len, mean).clamp(0, len - 1)
            }
            Some(pivot) => {
                let centered = self
                    .gaussian_float(pivot - 0.5, pivot + 0.5, 0.5)
                    .clamp(0.0, 1.0);
                self.gaussian_int(0, len, centered).clamp(0, len - 1)
            }
        };
        T::iter().nth(index as usize)
    }

    /// Bounded random-walk step for a byte: perturb by up to `step` in either
    /// direction, then clamp into `[min, max]`.
    pub fn vary_byte(&mut self, value: u8, min: u8, max: u8, step: u8) -> u8 {
        let varied = value as i32 + self.int_inclusive(-(step as f64), step as f64);
        varied.clamp(min as i32, max as i32) as u8
    }

    /// Bounded random-walk step for an integer.
    pub fn vary_int(&mut self, value: i32, min: i32, max: i32, step: i32) -> i32 {
        (value + self.int_inclusive(-step as f64, step as f64)).clamp(min, max)
    }

    /// Bounded random-walk step for a float. The perturbation itself is an
    /// integer draw in `[-step, step]`, as with the other variants.
    pub fn vary_float(&mut self, value: f64, min: f64, max: f64, step: f64) -> f64 {
        (value + self.int_inclusive(-step, step) as f64).clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_empty_source() {
        let mut rng = GameRng::with_seed(1);
        let empty: [i32; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick_excluding(&empty, &[1]), None);
        assert_eq!(rng.gaussian_pick(&empty, 0.5), None);
        assert!(rng.sample(&empty, 3, false).is_empty());
    }

    #[test]
    fn test_pick_excluding_terminates_when_unsatisfiable() {
        let mut rng = GameRng::with_seed(1);
        let source = [7, 7, 7];
        // Everything is excluded; the bounded fallback still returns a value.
        assert_eq!(rng.pick_excluding(&source, &[7]), Some(&7));
    }

    #[test]
    fn test_pick_weighted_reads_weights_only() {
        let mut rng = GameRng::with_seed(1);
        let values = ["a", "b", "c"];
        let weights = [1.0, 2.0, 3.0];
        let _ = rng.pick_weighted(&values, &weights);
        assert_eq!(weights, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_pick_weighted_zero_weights_fall_back_to_uniform() {
        let mut rng = GameRng::with_seed(1);
        let values = ["a", "b"];
        for _ in 0..50 {
            assert!(rng.pick_weighted(&values, &[0.0, 0.0]).is_some());
        }
    }

    #[test]
    fn test_vary_int_stays_clamped_and_local() {
        let mut rng = GameRng::with_seed(9);
        let mut value = 50;
        for _ in 0..1000 {
            let next = rng.vary_int(value, 0, 100, 5);
            assert!((0..=100).contains(&next));
            assert!((next - value).abs() <= 5);
            value = next;
        }
    }

    #[test]
    fn test_vary_byte_bounds() {
        let mut rng = GameRng::with_seed(9);
        let mut value = 250u8;
        for _ in 0..100 {
            value = rng.vary_byte(value, 0, 255, 10);
        }
    }
}
