//! Thread-safe boundary wrapper around the generator.
//!
//! [`GameRng`] itself carries no synchronization; bare draws from multiple
//! threads interleave non-deterministically and defeat reproducibility even
//! under a fixed seed. [`SharedRng`] is the boundary where concurrent access
//! is legitimate: it pairs the generator with two independent locks,
//!
//! - the **critical-section lock** (the generator mutex itself), for
//!   multi-draw procedures that other threads must observe as atomic, and
//! - the **mode lock**, serializing unbound-mode windows process-wide.
//!
//! Neither lock is reentrant, and no acquisition has a timeout.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::error::RngError;
use crate::source::GameRng;

/// Recover the guard from a poisoned lock.
///
/// A consumer panicking mid-draw must not brick the process-wide stream;
/// generator state is valid after any completed engine step.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cloneable handle to a process-wide shared generator.
///
/// Clones share the same underlying generator and locks; there is exactly
/// one generator identity per handle family.
///
/// # Example
/// ```
/// use game_rng_core_rs::SharedRng;
///
/// let rng = SharedRng::with_seed(42);
/// let (a, b) = rng.run_locked(|rng| (rng.int_in(0, 6), rng.int_in(0, 6)));
/// assert!((0..6).contains(&a) && (0..6).contains(&b));
/// ```
#[derive(Clone, Debug)]
pub struct SharedRng {
    /// The generator, doubling as the critical-section lock.
    inner: Arc<Mutex<GameRng>>,
    /// Serializes transitions into and out of unbound mode.
    mode_lock: Arc<Mutex<()>>,
}

impl SharedRng {
    /// Shared generator seeded from wall-clock time.
    pub fn new() -> Self {
        Self::from_rng(GameRng::new())
    }

    /// Shared generator with a deterministic seed.
    pub fn with_seed(seed: i32) -> Self {
        Self::from_rng(GameRng::with_seed(seed))
    }

    /// Wrap an existing generator, e.g. one restored from a checkpoint.
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
            mode_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Run `action` under the critical-section lock.
    ///
    /// Sequences of draws inside `action` are observed as atomic by every
    /// other consumer of this handle, in either mode.
    pub fn run_locked<R>(&self, action: impl FnOnce(&mut GameRng) -> R) -> R {
        let mut rng = lock_or_recover(&self.inner);
        action(&mut rng)
    }

    /// Run `action` inside an exclusive, clock-seeded unbound window.
    ///
    /// Takes the mode lock, enters unbound mode, runs `action`, and restores
    /// the deterministic engine. The window is exclusive process-wide: two
    /// threads calling this never observe interleaved unbound windows.
    ///
    /// Restoration is guaranteed on the normal return path only; for
    /// panic-safety across the window use [`unbound`](Self::unbound).
    pub fn run_unbound_locked<R>(
        &self,
        action: impl FnOnce(&mut GameRng) -> R,
    ) -> Result<R, RngError> {
        let _mode = lock_or_recover(&self.mode_lock);
        let mut rng = lock_or_recover(&self.inner);
        rng.enter_unbound(0)?;
        let result = action(&mut rng);
        rng.exit_unbound()?;
        Ok(result)
    }

    /// Enter an unbound window that ends when the returned scope drops.
    ///
    /// Acquires the mode lock and switches to an unbound engine seeded with
    /// `seed` (`0` means wall clock). The scope restores the deterministic
    /// engine and releases the lock on every exit path, including unwinds.
    /// While the scope is alive no other thread can open an unbound window,
    /// and a second `enter_unbound` through the scope is unreachable.
    ///
    /// # Errors
    ///
    /// [`RngError::UnboundActive`] if the generator was put into unbound
    /// mode through some path that bypassed the mode lock.
    pub fn unbound(&self, seed: i32) -> Result<UnboundScope<'_>, RngError> {
        let mode = lock_or_recover(&self.mode_lock);
        lock_or_recover(&self.inner).enter_unbound(seed)?;
        Ok(UnboundScope {
            shared: self,
            _mode: mode,
        })
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new()
    }
}

/// An exclusive unbound-mode window.
///
/// Created by [`SharedRng::unbound`]. Holds the mode lock for its whole
/// lifetime; dropping it restores the parked deterministic engine.
#[must_use = "dropping the scope immediately ends the unbound window"]
pub struct UnboundScope<'a> {
    shared: &'a SharedRng,
    _mode: MutexGuard<'a, ()>,
}

impl UnboundScope<'_> {
    /// Run `action` against the unbound generator, under the
    /// critical-section lock.
    pub fn with<R>(&self, action: impl FnOnce(&mut GameRng) -> R) -> R {
        let mut rng = lock_or_recover(&self.shared.inner);
        action(&mut rng)
    }
}

impl Drop for UnboundScope<'_> {
    fn drop(&mut self) {
        let mut rng = lock_or_recover(&self.shared.inner);
        if rng.exit_unbound().is_err() {
            // Only reachable if the action exited unbound mode by hand.
            warn!("unbound scope dropped with no parked engine to restore");
        }
    }
}
