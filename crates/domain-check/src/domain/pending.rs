//! Pending Check Slot - async bridge between callers and result events.
//!
//! Holds at most one outstanding check. Registering a new check
//! unconditionally replaces the previous one (latest-wins); a result event
//! fulfills the slot only if its domain name matches the one registered.
//!
//! Flow:
//! 1. Caller calls `register()` and gets a ticket plus a oneshot receiver
//! 2. Caller dispatches the check action
//! 3. The result router receives a `DomainAvailabilityChecked` event and
//!    calls `complete()`
//! 4. Caller awaits the receiver (usually under a timeout)
//!
//! All slot transitions happen under one mutex, so `register`, `complete`,
//! and `clear_if_current` can race freely across tasks without ever
//! fulfilling a superseded or cancelled check.

use parking_lot::Mutex;
use shared_types::DomainCheckResult;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tracing::debug;

/// A pending availability check waiting for its result event.
struct PendingCheck {
    /// Ticket identifying this registration; newer registrations get
    /// strictly greater tickets.
    ticket: u64,
    /// The queried domain name; result events are matched against it.
    domain_name: String,
    /// Single-use channel that resumes the waiting caller.
    sender: oneshot::Sender<DomainCheckResult>,
}

/// Statistics for the pending check slot.
#[derive(Debug, Default)]
pub struct PendingCheckStats {
    /// Total checks registered.
    pub total_registered: AtomicU64,
    /// Total checks completed with a result.
    pub total_completed: AtomicU64,
    /// Total checks replaced by a newer registration.
    pub total_superseded: AtomicU64,
    /// Total result events dropped (key mismatch or empty slot).
    pub total_stale_dropped: AtomicU64,
    /// Total checks cancelled (caller gone before the result arrived).
    pub total_cancelled: AtomicU64,
}

/// Single-slot store for the one in-flight availability check.
///
/// The slot deliberately does not queue: overlapping checks are resolved by
/// replacement, so only the most recently issued check can ever be
/// fulfilled.
pub struct PendingCheckSlot {
    /// The current outstanding check, if any.
    slot: Mutex<Option<PendingCheck>>,
    /// Ticket source for registrations.
    next_ticket: AtomicU64,
    /// Statistics.
    stats: PendingCheckStats,
}

impl PendingCheckSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            next_ticket: AtomicU64::new(0),
            stats: PendingCheckStats::default(),
        }
    }

    /// Register a check for `domain_name` and get a receiver for its result.
    ///
    /// Any previously registered check is replaced; its sender is dropped,
    /// which closes the superseded caller's receiver.
    ///
    /// Returns the registration ticket and the result receiver.
    pub fn register(&self, domain_name: &str) -> (u64, oneshot::Receiver<DomainCheckResult>) {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed) + 1;
        let (tx, rx) = oneshot::channel();

        let previous = self.slot.lock().replace(PendingCheck {
            ticket,
            domain_name: domain_name.to_string(),
            sender: tx,
        });

        self.stats.total_registered.fetch_add(1, Ordering::Relaxed);

        if let Some(old) = previous {
            self.stats.total_superseded.fetch_add(1, Ordering::Relaxed);
            debug!(
                domain = %old.domain_name,
                by = %domain_name,
                "Pending check superseded"
            );
        }

        debug!(domain = %domain_name, ticket = ticket, "Registered pending check");

        (ticket, rx)
    }

    /// Complete the outstanding check with a result event.
    ///
    /// The result is delivered only if its `domain_name` matches the
    /// registered one; otherwise it is dropped with no state change.
    /// A sender whose receiver is already gone counts as cancelled and the
    /// payload is dropped.
    ///
    /// Returns true if a waiting caller was resumed.
    pub fn complete(&self, result: DomainCheckResult) -> bool {
        let entry = {
            let mut slot = self.slot.lock();
            match &*slot {
                Some(pending) if pending.domain_name == result.domain_name => slot.take(),
                Some(pending) => {
                    debug!(
                        pending = %pending.domain_name,
                        received = %result.domain_name,
                        "Result dropped (key mismatch)"
                    );
                    None
                }
                None => {
                    debug!(received = %result.domain_name, "Result dropped (no pending check)");
                    None
                }
            }
        };

        let Some(entry) = entry else {
            self.stats.total_stale_dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        };

        let domain_name = entry.domain_name;
        match entry.sender.send(result) {
            Ok(()) => {
                self.stats.total_completed.fetch_add(1, Ordering::Relaxed);
                debug!(domain = %domain_name, "Completed pending check");
                true
            }
            Err(_) => {
                // Receiver was dropped (caller cancelled or timed out)
                self.stats.total_cancelled.fetch_add(1, Ordering::Relaxed);
                debug!(domain = %domain_name, "Pending check receiver dropped");
                false
            }
        }
    }

    /// Clear the slot if it still holds the registration with `ticket`.
    ///
    /// Used by timeout and cancellation cleanup; a slot already taken by
    /// `complete()` or replaced by a newer `register()` is left untouched.
    ///
    /// Returns true if the slot was cleared.
    pub fn clear_if_current(&self, ticket: u64) -> bool {
        let entry = {
            let mut slot = self.slot.lock();
            match &*slot {
                Some(pending) if pending.ticket == ticket => slot.take(),
                _ => None,
            }
        };

        match entry {
            Some(entry) => {
                self.stats.total_cancelled.fetch_add(1, Ordering::Relaxed);
                debug!(
                    domain = %entry.domain_name,
                    ticket = ticket,
                    "Cleared pending check"
                );
                true
            }
            None => false,
        }
    }

    /// Return a guard that clears this registration when dropped.
    ///
    /// Arms every exit path of a waiting caller at once: timeout, error,
    /// and the caller's future being dropped mid-await.
    #[must_use]
    pub fn guard(&self, ticket: u64) -> ClearOnDrop<'_> {
        ClearOnDrop { slot: self, ticket }
    }

    /// Number of outstanding checks (0 or 1).
    #[must_use]
    pub fn pending_count(&self) -> usize {
        usize::from(self.slot.lock().is_some())
    }

    /// Whether a check for `domain_name` is currently outstanding.
    #[must_use]
    pub fn is_pending(&self, domain_name: &str) -> bool {
        self.slot
            .lock()
            .as_ref()
            .is_some_and(|pending| pending.domain_name == domain_name)
    }

    /// Get statistics.
    #[must_use]
    pub fn stats(&self) -> &PendingCheckStats {
        &self.stats
    }
}

impl Default for PendingCheckSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that clears a registration on drop unless a newer check (or a
/// completed result) already owns the slot.
pub struct ClearOnDrop<'a> {
    slot: &'a PendingCheckSlot,
    ticket: u64,
}

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.slot.clear_if_current(self.ticket);
    }
}
