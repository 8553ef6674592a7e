//! Generator state, mode control, and primitive sampling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::Engine;
use crate::error::RngError;

/// Default bound for exclusion-based redraw loops.
///
/// After this many failed attempts a pick returns the last-drawn value even
/// if it is excluded. Tunable per generator via
/// [`GameRng::set_exclusion_retry_limit`].
pub const DEFAULT_EXCLUSION_RETRY_LIMIT: u32 = 64;

/// The deterministic random source for a whole game session.
///
/// Owns the active [`Engine`] (the deterministic stream) and, while unbound
/// mode is active, the parked pre-unbound engine. All stochastic behavior in
/// the game draws from one `GameRng` so that a single seed reproduces a
/// whole session.
///
/// `GameRng` itself has no synchronization; reproducibility holds for
/// single-threaded call sequences. Concurrent consumers go through
/// [`SharedRng`](crate::shared::SharedRng).
///
/// # Example
/// ```
/// use game_rng_core_rs::GameRng;
///
/// let mut rng = GameRng::with_seed(42);
/// let roll = rng.int_in(0, 10);      // [0, 10)
/// let fraction = rng.float();        // [0.0, 1.0)
/// assert!((0..10).contains(&roll));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRng {
    /// The active engine; every draw advances it.
    active: Engine,

    /// Pre-unbound engine, parked between `enter_unbound` and `exit_unbound`.
    parked: Option<Engine>,

    /// Retry bound for exclusion-based picks.
    exclusion_retry_limit: u32,
}

impl GameRng {
    /// Create a generator seeded from wall-clock time.
    ///
    /// This is the non-reproducible process-start default; call
    /// [`set_seed`](Self::set_seed) or [`seed_or_derive`](Self::seed_or_derive)
    /// to pin the session to a concrete seed.
    pub fn new() -> Self {
        Self::from_engine(Engine::from_clock())
    }

    /// Create a generator with a deterministic seed.
    pub fn with_seed(seed: i32) -> Self {
        Self::from_engine(Engine::new(seed))
    }

    fn from_engine(engine: Engine) -> Self {
        Self {
            active: engine,
            parked: None,
            exclusion_retry_limit: DEFAULT_EXCLUSION_RETRY_LIMIT,
        }
    }

    // ========================================================================
    // Seeding & mode control
    // ========================================================================

    /// Replace the active engine with a freshly seeded one.
    ///
    /// A parked engine, if one exists, is not affected.
    pub fn set_seed(&mut self, seed: i32) {
        debug!(seed, "reseeding deterministic engine");
        self.active = Engine::new(seed);
    }

    /// Seed deterministically, deriving a concrete seed when given `0`.
    ///
    /// With a non-zero `seed`, seeds with it and returns it unchanged. With
    /// `0`, first seeds from wall-clock time, draws a full-range value as
    /// the real seed, re-seeds with it, and returns it. Either way the
    /// caller ends up with a concrete, loggable seed that reproduces the
    /// session.
    pub fn seed_or_derive(&mut self, seed: i32) -> i32 {
        if seed != 0 {
            self.set_seed(seed);
            return seed;
        }
        self.active = Engine::from_clock();
        let derived = self.int();
        self.set_seed(derived);
        derived
    }

    /// Park the deterministic engine and switch to an unbound one.
    ///
    /// The new engine is seeded with `seed`, or from wall-clock time when
    /// `seed == 0`. Used for cosmetic draws that must not perturb
    /// simulation-critical sequences.
    ///
    /// # Errors
    ///
    /// [`RngError::UnboundActive`] if an engine is already parked; honoring
    /// a second enter would discard the deterministic stream.
    pub fn enter_unbound(&mut self, seed: i32) -> Result<(), RngError> {
        if self.parked.is_some() {
            return Err(RngError::UnboundActive);
        }
        debug!(seed, "entering unbound mode");
        let unbound = if seed == 0 {
            Engine::from_clock()
        } else {
            Engine::new(seed)
        };
        self.parked = Some(std::mem::replace(&mut self.active, unbound));
        Ok(())
    }

    /// Restore the parked deterministic engine and clear the park slot.
    ///
    /// # Errors
    ///
    /// [`RngError::NotUnbound`] when no engine is parked.
    pub fn exit_unbound(&mut self) -> Result<(), RngError> {
        match self.parked.take() {
            Some(engine) => {
                debug!("exiting unbound mode");
                self.active = engine;
                Ok(())
            }
            None => Err(RngError::NotUnbound),
        }
    }

    /// Whether unbound mode is currently active.
    pub fn is_unbound(&self) -> bool {
        self.parked.is_some()
    }

    /// Current retry bound for exclusion-based picks.
    pub fn exclusion_retry_limit(&self) -> u32 {
        self.exclusion_retry_limit
    }

    /// Tune the retry bound for exclusion-based picks.
    pub fn set_exclusion_retry_limit(&mut self, limit: u32) {
        self.exclusion_retry_limit = limit;
    }

    // ========================================================================
    // Primitive sampling
    // ========================================================================

    /// Full-range signed 32-bit draw.
    pub fn int(&mut self) -> i32 {
        self.active.next_i32()
    }

    /// Integer in `[min, max)`, `max` exclusive.
    ///
    /// A degenerate range (`min >= max`) returns `min`.
    pub fn int_in(&mut self, min: i32, max: i32) -> i32 {
        self.active.range_i32(min, max)
    }

    /// Integer in `[min, max]`, both endpoints inclusive.
    ///
    /// Endpoints are floats truncated toward zero before widening; the
    /// float-parameter and inclusive-max asymmetry against
    /// [`int_in`](Self::int_in) is intentional and load-bearing for callers
    /// like [`vary_int`](Self::vary_int) that pass `(-step, step)`.
    pub fn int_inclusive(&mut self, min: f64, max: f64) -> i32 {
        self.int_in(min as i32, max as i32 + 1)
    }

    /// Float in `[0.0, 1.0)`.
    pub fn float(&mut self) -> f64 {
        self.active.next_f64()
    }

    /// Float in `[min, max)`, linear scale of a `[0, 1)` draw.
    pub fn float_in(&mut self, min: f64, max: f64) -> f64 {
        self.float() * (max - min) + min
    }

    /// True with probability `chance`.
    ///
    /// Not clamped: `chance >= 1.0` is always true, `chance <= 0.0` (and
    /// NaN) always false.
    pub fn chance(&mut self, chance: f64) -> bool {
        self.float() < chance
    }

    /// Equally likely to return true or false.
    pub fn flip_coin(&mut self) -> bool {
        self.chance(0.5)
    }

    /// A probability draw in `[0.0, 1.0)`; alias of [`float`](Self::float).
    pub fn probability(&mut self) -> f64 {
        self.float()
    }

    /// `+1` with probability `threshold`, else `-1`.
    pub fn sign(&mut self, threshold: f64) -> i32 {
        if self.chance(threshold) {
            1
        } else {
            -1
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new()
    }
}
