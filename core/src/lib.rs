//! Game Randomness Core - Deterministic RNG Engine
//!
//! Single-stream deterministic random source for games and simulations,
//! with derived distributions, collection sampling, and a lock-guarded
//! escape hatch for intentionally non-deterministic draws.
//!
//! # Architecture
//!
//! - **engine**: the xorshift64* bit source
//! - **source**: generator state, mode control, primitive/distribution/
//!   collection sampling, pseudo-Perlin walks
//! - **shared**: the thread-safety boundary (critical-section and mode locks)
//! - **registry**: typed registered-function table
//! - **error**: [`RngError`]
//!
//! # Critical Invariants
//!
//! 1. One generator identity per session: every consumer draws from the
//!    same [`GameRng`], so a single seed reproduces the whole session.
//! 2. Unbound mode parks the deterministic engine and restores it exactly;
//!    a draw after the excursion equals the draw with no excursion.
//! 3. Bare draws are unsynchronized by design; cross-thread reproducibility
//!    requires [`SharedRng`]'s locks.

// Module declarations
pub mod engine;
pub mod error;
pub mod registry;
pub mod shared;
pub mod source;

// Re-exports for convenience
pub use engine::Engine;
pub use error::RngError;
pub use registry::FunctionRegistry;
pub use shared::{SharedRng, UnboundScope};
pub use source::{GameRng, DEFAULT_EXCLUSION_RETRY_LIMIT};
