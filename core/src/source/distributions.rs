//! Derived distributions layered on the primitive draws.

use super::rng::GameRng;

impl GameRng {
    /// Normally distributed draw via the Box–Muller transform.
    ///
    /// Consumes two uniform draws per call; the cosine-branch variate that
    /// Box–Muller also produces is discarded rather than cached. That wastes
    /// half the transform but keeps the draw count per call fixed, which the
    /// determinism contract depends on.
    pub fn gaussian(&mut self, mean: f64, deviation: f64) -> f64 {
        let u1 = self.float();
        let u2 = self.float();
        let std_normal = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).sin();
        mean + deviation * std_normal
    }

    /// A "biased fraction": `gaussian(mean, 0.25)` clamped into `[0, 1]`.
    ///
    /// The narrow deviation plus clamping concentrates mass near `mean`;
    /// reused by every Gaussian-biased range and index operation.
    pub fn normalized_gaussian(&mut self, mean: f64) -> f64 {
        self.gaussian(mean, 0.25).clamp(0.0, 1.0)
    }

    /// Gaussian-biased float in `[min, max]`, mass concentrated where the
    /// normalized position equals `mean`.
    ///
    /// `max` is inclusive: it is produced exactly when the clamped variate
    /// lands on 1.0. The integer variant [`gaussian_int`](Self::gaussian_int)
    /// follows the same convention.
    pub fn gaussian_float(&mut self, min: f64, max: f64, mean: f64) -> f64 {
        min + self.normalized_gaussian(mean) * (max - min)
    }

    /// Gaussian-biased integer in `[min, max]`, both endpoints inclusive.
    ///
    /// The remapped variate is truncated; `max` is produced exactly when the
    /// clamped variate lands on 1.0.
    pub fn gaussian_int(&mut self, min: i32, max: i32, mean: f64) -> i32 {
        let value = self.normalized_gaussian(mean);
        (min as f64 + (max - min) as f64 * value) as i32
    }

    /// Draw from a triangular distribution over `[min, max]` peaking at `mode`.
    ///
    /// Standard inverse-CDF sampling, branching on whether the uniform draw
    /// falls left or right of `(mode - min) / (max - min)`.
    pub fn triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        let u = self.float();
        if u < (mode - min) / (max - min) {
            min + (u * (max - min) * (mode - min)).sqrt()
        } else {
            max - ((1.0 - u) * (max - min) * (max - mode)).sqrt()
        }
    }

    /// `floor` raised to a uniform exponent in `[min, max]` (inclusive).
    ///
    /// `floor == 1` short-circuits to `1` without drawing; `floor == 2` is a
    /// left shift. Negative exponent draws clamp to zero, so the result is
    /// always at least `1`.
    pub fn pow_in(&mut self, min: i32, max: i32, floor: i32) -> i32 {
        if floor == 1 {
            return 1;
        }
        let exponent = self.int_in(min, max + 1).max(0);
        if floor == 2 {
            return 1 << exponent;
        }
        floor.pow(exponent as u32)
    }

    /// `floor` raised to a Gaussian-biased exponent in `[min, max]`.
    ///
    /// Same short-circuits and exponent clamp as [`pow_in`](Self::pow_in);
    /// the exponent comes from [`gaussian_int`](Self::gaussian_int) pivoted
    /// at `pivot`.
    pub fn gaussian_pow(&mut self, min: i32, max: i32, pivot: f64, floor: i32) -> i32 {
        if floor == 1 {
            return 1;
        }
        let exponent = self.gaussian_int(min, max, pivot).max(0);
        if floor == 2 {
            return 1 << exponent;
        }
        floor.pow(exponent as u32)
    }
}
