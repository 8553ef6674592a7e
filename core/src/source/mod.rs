//! Generator state, mode control, and sampling operations
//!
//! [`GameRng`] is the single generator identity for a game session. It owns
//! the active deterministic [`Engine`](crate::engine::Engine) plus the
//! transiently parked one used by unbound mode, and layers all sampling
//! operations on top:
//!
//! - `rng`: state, mode control, primitive draws
//! - `distributions`: Gaussian, triangular, power-law draws
//! - `collections`: shuffle, picks, weighted choice, enum sampling
//! - `perlin`: bounded random-walk sequence generation

mod collections;
mod distributions;
mod perlin;
mod rng;

pub use rng::{GameRng, DEFAULT_EXCLUSION_RETRY_LIMIT};
