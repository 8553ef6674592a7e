//! Registered-function table.
//!
//! An insertion-ordered, append-only list of zero-argument callbacks,
//! addressed by integer handle. A convenience indirection layer for content
//! code that wants to hand out "roll this later" closures without threading
//! concrete types around; not part of the randomness contract itself.
//!
//! Handles are stable for the registry's lifetime and are never reused.
//! Retrieval is type-checked: asking for a different type than was
//! registered fails with [`RngError::TypeMismatch`] instead of misbehaving.

use std::any::{type_name, Any};
use std::fmt;

use crate::error::RngError;

type Callback = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Append-only table mapping integer handles to typed callbacks.
///
/// # Example
/// ```
/// use game_rng_core_rs::{FunctionRegistry, GameRng};
/// use std::sync::{Arc, Mutex};
///
/// let rng = Arc::new(Mutex::new(GameRng::with_seed(42)));
/// let mut registry = FunctionRegistry::new();
///
/// let roller = Arc::clone(&rng);
/// let handle = registry.register(move || {
///     let mut rng = roller.lock().unwrap();
///     rng.int_in(1, 7)
/// });
///
/// let roll: i32 = registry.call(handle).unwrap();
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Default)]
pub struct FunctionRegistry {
    entries: Vec<RegisteredFunction>,
}

struct RegisteredFunction {
    callback: Callback,
    /// Return type of the callback, for mismatch diagnostics.
    returns: &'static str,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a callback and return its handle.
    ///
    /// Handles are assigned in insertion order and remain valid for the
    /// registry's lifetime.
    pub fn register<T, F>(&mut self, callback: F) -> usize
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.entries.push(RegisteredFunction {
            callback: Box::new(move || Box::new(callback()) as Box<dyn Any + Send>),
            returns: type_name::<T>(),
        });
        self.entries.len() - 1
    }

    /// Invoke a registered callback, checking the requested type.
    ///
    /// # Errors
    ///
    /// [`RngError::UnknownHandle`] for a handle that was never issued;
    /// [`RngError::TypeMismatch`] when `T` differs from the registered
    /// callback's return type.
    pub fn call<T: Any>(&self, handle: usize) -> Result<T, RngError> {
        let entry = self
            .entries
            .get(handle)
            .ok_or(RngError::UnknownHandle(handle))?;
        (entry.callback)()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| RngError::TypeMismatch {
                expected: type_name::<T>(),
                found: entry.returns,
            })
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("len", &self.entries.len())
            .finish()
    }
}
