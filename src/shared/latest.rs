//! Stale-result guard for loads that cannot be cancelled mid-flight.
//!
//! A view starts a load with [`Latest::begin`] and checks the returned
//! [`Ticket`] when the response arrives. Any later `begin` (a new target or
//! date range) or an [`Latest::invalidate`] (the view went away) makes the
//! earlier ticket stale, and its result must be dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Tracks the most recently started load.
#[derive(Debug, Default)]
pub struct Latest {
    seq: AtomicU64,
}

/// Proof of which load a response belongs to, with the parameters it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    seq: u64,
    key: K,
}

impl<K> Ticket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

impl Latest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `key`, superseding every earlier ticket.
    pub fn begin<K>(&self, key: K) -> Ticket<K> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { seq, key }
    }

    /// Whether `ticket` still belongs to the newest load.
    pub fn is_current<K>(&self, ticket: &Ticket<K>) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket.seq
    }

    /// Mark every outstanding ticket stale (view teardown).
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_begin_supersedes() {
        let latest = Latest::new();
        let first = latest.begin("rice");
        assert!(latest.is_current(&first));
        let second = latest.begin("fish");
        assert!(!latest.is_current(&first));
        assert!(latest.is_current(&second));
        assert_eq!(*second.key(), "fish");
    }

    #[test]
    fn test_invalidate_discards_outstanding() {
        let latest = Latest::new();
        let ticket = latest.begin(1u32);
        latest.invalidate();
        assert!(!latest.is_current(&ticket));
    }

    #[test]
    fn test_same_key_restart_is_still_stale() {
        let latest = Latest::new();
        let a = latest.begin("rice");
        let b = latest.begin("rice");
        assert!(!latest.is_current(&a));
        assert!(latest.is_current(&b));
    }
}
