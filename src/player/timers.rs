//! Single-threaded timer queue.
//!
//! Every suspension point of the player (per-character delay, line lead-in,
//! inter-line pause, completion hold) is an entry in a `TimerQueue`. The
//! owner pops due entries against its clock; nothing fires on its own, so
//! cancelling is just removing the entry.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle returned by `TimerQueue::schedule`, used to cancel one timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deadline-ordered queue of pending events.
///
/// Entries with equal deadlines fire in the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<E> {
    next_seq: u64,
    entries: BTreeMap<(Duration, u64), E>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_seq: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Schedule `event` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, event: E) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((deadline, seq), event);
        TimerId(seq)
    }

    /// Cancel a single timer. Returns the event if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        let key = self
            .entries
            .keys()
            .find(|(_, seq)| *seq == id.0)
            .copied()?;
        self.entries.remove(&key)
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Pop the earliest timer if its deadline is at or before `now`.
    ///
    /// Returns the deadline alongside the event so follow-up timers can be
    /// scheduled relative to when this one was due, not when it was noticed.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let (&(deadline, seq), _) = self.entries.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.entries
            .remove(&(deadline, seq))
            .map(|event| (deadline, event))
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
