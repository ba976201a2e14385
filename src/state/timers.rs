//! Timer State - One-shot deadline queue
//!
//! All cosmetic delays (counter start, ripple expiry, notice delivery,
//! page-loaded flag) are fire-and-forget one-shot timers with no
//! cancellation path. The host pumps the queue by calling the
//! synchronizer's `tick` with the current time; nothing here sleeps or
//! spawns threads, which keeps every delay deterministic under test.

use std::time::Instant;

// =============================================================================
// Actions
// =============================================================================

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Begin the one-time counter ramp.
    StartCounters,
    /// Turn on the page-wide loaded state.
    MarkLoaded,
    /// Remove the ripple with this sequence number.
    ExpireRipple(u64),
    /// Move the queued notice with this sequence number to the ready list.
    DeliverNotice(u64),
}

// =============================================================================
// Queue
// =============================================================================

#[derive(Debug, Clone)]
struct TimerEntry {
    due_at: Instant,
    action: TimerAction,
}

/// Pending one-shot timers, drained in deadline order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule an action. Duplicate actions are allowed; the guard against
    /// double-firing (e.g. counters) belongs to whoever schedules.
    pub fn schedule(&mut self, due_at: Instant, action: TimerAction) {
        self.entries.push(TimerEntry { due_at, action });
    }

    /// Remove and return every action due at or before `now`, in deadline
    /// order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let mut due: Vec<TimerEntry> = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].due_at <= now {
                due.push(self.entries.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|entry| entry.due_at);
        due.into_iter().map(|entry| entry.action).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fire_due_respects_deadlines() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(600), TimerAction::ExpireRipple(0));
        queue.schedule(start + Duration::from_millis(300), TimerAction::DeliverNotice(1));

        // Nothing due yet
        assert!(queue.fire_due(start + Duration::from_millis(100)).is_empty());
        assert_eq!(queue.len(), 2);

        // Only the notice is due
        assert_eq!(
            queue.fire_due(start + Duration::from_millis(300)),
            vec![TimerAction::DeliverNotice(1)]
        );
        assert_eq!(queue.len(), 1);

        // The ripple follows
        assert_eq!(
            queue.fire_due(start + Duration::from_millis(700)),
            vec![TimerAction::ExpireRipple(0)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fire_due_orders_by_deadline() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(500), TimerAction::StartCounters);
        queue.schedule(start + Duration::from_millis(100), TimerAction::MarkLoaded);

        // A coarse tick that covers both still delivers them in order
        assert_eq!(
            queue.fire_due(start + Duration::from_millis(1000)),
            vec![TimerAction::MarkLoaded, TimerAction::StartCounters]
        );
    }

    #[test]
    fn test_timers_fire_once() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start, TimerAction::MarkLoaded);

        assert_eq!(queue.fire_due(start).len(), 1);
        assert!(queue.fire_due(start).is_empty());
    }
}
