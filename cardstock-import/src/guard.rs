//! Cooperative in-flight guard for write operations.
//!
//! The UI disables its submit controls while a save is in flight; this is
//! the library-side equivalent. One guard per logical operation: a second
//! `try_begin` while the first token is alive returns `None`, so a
//! double-triggered handler cannot issue two concurrent writes.

use std::sync::atomic::{AtomicBool, Ordering};

/// Advisory single-flight flag. Not a lock around the store; callers
/// that bypass the guard are on their own.
#[derive(Debug, Default)]
pub struct OpGuard {
    busy: AtomicBool,
}

impl OpGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the guard. Returns `None` while a previous claim is alive.
    pub fn try_begin(&self) -> Option<OpToken<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .ok()
            .map(|_| OpToken { guard: self })
    }

    /// Whether an operation is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the guard on drop.
#[derive(Debug)]
pub struct OpToken<'a> {
    guard: &'a OpGuard,
}

impl Drop for OpToken<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_fails_while_first_is_held() {
        let guard = OpGuard::new();

        let token = guard.try_begin().expect("first claim");
        assert!(guard.in_flight());
        assert!(guard.try_begin().is_none());

        drop(token);
        assert!(!guard.in_flight());
        assert!(guard.try_begin().is_some());
    }
}
