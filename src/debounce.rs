//! Cancellable timers driven by the UI event loop.
//!
//! Nothing here spawns threads. The event loop asks [`Scheduler::next_deadline`]
//! how long it may block, then calls [`Scheduler::fire_due`] with the current
//! instant and handles whatever payloads come back. This keeps every state
//! change on the UI thread and makes the timers testable with synthetic clocks.

use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Identifies one scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer<T> {
    deadline: Instant,
    payload: T,
}

/// A set of pending one-shot timers carrying payloads of type `T`.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: FxHashMap<u64, Timer<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Scheduler {
            next_id: 0,
            pending: FxHashMap::default(),
        }
    }

    /// Schedule `payload` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerHandle {
        self.schedule_at(Instant::now() + delay, payload)
    }

    /// Schedule `payload` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Instant, payload: T) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert(id, Timer { deadline, payload });
        TimerHandle(id)
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle.0).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle.0)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|t| t.deadline).min()
    }

    /// Remove and return the payloads of all timers due at `now`, in
    /// deadline order (ties broken by scheduling order).
    pub fn fire_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<(Instant, u64)> = self
            .pending
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .map(|(id, t)| (t.deadline, *id))
            .collect();
        due.sort_unstable();

        due.into_iter()
            .filter_map(|(_, id)| self.pending.remove(&id))
            .map(|t| t.payload)
            .collect()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single debounced action: every [`Debouncer::trigger`] cancels the
/// previous timer, so only the latest one can fire.
#[derive(Debug)]
pub struct Debouncer<T> {
    scheduler: Scheduler<T>,
    delay: Duration,
    current: Option<TimerHandle>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            scheduler: Scheduler::new(),
            delay,
            current: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the quiet period with `payload`.
    pub fn trigger(&mut self, payload: T) -> TimerHandle {
        self.trigger_at(Instant::now(), payload)
    }

    /// Like [`Debouncer::trigger`], measuring the delay from `now`.
    pub fn trigger_at(&mut self, now: Instant, payload: T) -> TimerHandle {
        self.cancel();
        let handle = self.scheduler.schedule_at(now + self.delay, payload);
        self.current = Some(handle);
        handle
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(handle) => self.scheduler.cancel(handle),
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.current
            .is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// The payload of the pending timer if its quiet period has elapsed.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        let fired = self.scheduler.fire_due(now).pop();
        if fired.is_some() {
            self.current = None;
        }
        fired
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}
