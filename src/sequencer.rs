//! Latest-only Request Sequencing
//!
//! Each input that queries the backend while the user types owns a
//! `RequestSequence`. Every change takes a ticket; a response may only touch the
//! UI while its ticket is still the newest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every earlier ticket and hand out a new one
    pub fn issue(&self) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Void every outstanding ticket without starting a new request
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Wait out the debounce window; false if a newer ticket was issued meanwhile
    pub async fn settle(&self, debounce_ms: u32) -> bool {
        if debounce_ms > 0 {
            TimeoutFuture::new(debounce_ms).await;
        }
        self.is_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let sequence = RequestSequence::new();
        let first = sequence.issue();
        assert!(first.is_current());

        let second = sequence.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_clones_share_counter() {
        let sequence = RequestSequence::new();
        let handle = sequence.clone();
        let ticket = sequence.issue();
        let _newer = handle.issue();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_invalidate_voids_pending_ticket() {
        let sequence = RequestSequence::new();
        let typed = sequence.issue();
        sequence.invalidate();
        assert!(!typed.is_current());

        let next = sequence.issue();
        assert!(next.is_current());
    }

    #[test]
    fn test_separate_sequences_are_independent() {
        let name = RequestSequence::new();
        let path = RequestSequence::new();
        let name_ticket = name.issue();
        let _ = path.issue();
        let _ = path.issue();
        assert!(name_ticket.is_current());
    }
}
