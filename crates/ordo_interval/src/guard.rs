//! Recursion guard for structural equality, hashing and inspection.
//!
//! Bound values may contain the interval that contains them. Every guarded
//! operation records the objects it is currently visiting; a re-entrant
//! visit is reported to the caller instead of recursing, and the caller
//! substitutes a fixed answer (equal, neutral hash, placeholder text).
//!
//! A guard is created per top-level call and threaded explicitly through
//! the `Bound` hooks, so there is no global state and no cross-thread
//! interference.
//!
//! Guarded sections also run under [`ensure_sufficient_stack`], which keeps
//! deeply nested (but acyclic) values from overflowing the stack.

use rustc_hash::FxHashSet;

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// - **Native**: uses `stacker::maybe_grow` to grow the stack on demand
/// - **WASM**: calls `f()` directly
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Set of in-flight comparisons and visits, keyed by object address.
#[derive(Debug, Default)]
pub struct RecursionGuard {
    /// Pairs being compared (equality).
    pairs: FxHashSet<(usize, usize)>,
    /// Objects being visited (hashing, inspection).
    objects: FxHashSet<usize>,
}

impl RecursionGuard {
    /// Create an empty guard for one top-level operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with the pair `(a, b)` marked in flight.
    ///
    /// Returns `None` without calling `f` if the same pair is already being
    /// compared further up the call chain.
    pub fn paired<A: ?Sized, B: ?Sized, R>(
        &mut self,
        a: &A,
        b: &B,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        let key = (address(a), address(b));
        if !self.pairs.insert(key) {
            tracing::trace!("recursive comparison detected");
            return None;
        }
        let result = ensure_sufficient_stack(|| f(self));
        self.pairs.remove(&key);
        Some(result)
    }

    /// Run `f` with `object` marked in flight.
    ///
    /// Returns `None` without calling `f` if `object` is already being
    /// visited further up the call chain.
    pub fn single<T: ?Sized, R>(&mut self, object: &T, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        let key = address(object);
        if !self.objects.insert(key) {
            tracing::trace!("recursive visit detected");
            return None;
        }
        let result = ensure_sufficient_stack(|| f(self));
        self.objects.remove(&key);
        Some(result)
    }

    /// Number of pairs and objects currently in flight.
    pub fn in_flight(&self) -> usize {
        self.pairs.len() + self.objects.len()
    }
}

fn address<T: ?Sized>(value: &T) -> usize {
    std::ptr::from_ref(value).cast::<()>() as usize
}
