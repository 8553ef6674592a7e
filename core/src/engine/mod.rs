//! Deterministic random bit source
//!
//! Uses the xorshift64* algorithm. CRITICAL: all randomness in the game
//! MUST flow through an [`Engine`] owned by [`crate::source::GameRng`].

mod xorshift;

pub use xorshift::Engine;
