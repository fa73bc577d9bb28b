//! Clock and delayed-task queue.
//!
//! All tweens share one clock and one [`TimerQueue`]. Each tween keeps at
//! most one [`TaskHandle`] into the queue; cancelling removes the entry
//! immediately, so a cancelled task can never fire. The host drives the
//! queue by calling [`Tweener::run_due`](crate::registry::Tweener::run_due),
//! typically after sleeping until [`TimerQueue::next_deadline`].

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use crate::types::TweenId;

/// Monotonic time source in milliseconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock; clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// What a scheduled task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// The start delay has elapsed.
    Begin,
    /// Next animation frame.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub tween: TweenId,
    pub kind: TaskKind,
}

/// Deadline in milliseconds, totally ordered.
#[derive(Debug, Clone, Copy)]
struct Deadline(f64);

impl PartialEq for Deadline {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Deadline {}

impl PartialOrd for Deadline {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Deadline {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Cancelable reference to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskHandle {
    due: Deadline,
    seq: u64,
}

impl TaskHandle {
    pub fn due(&self) -> f64 {
        self.due.0
    }
}

/// Delayed-task queue ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    tasks: BTreeMap<TaskHandle, ScheduledTask>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, due: f64, task: ScheduledTask) -> TaskHandle {
        let handle = TaskHandle {
            due: Deadline(due),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.tasks.insert(handle, task);
        handle
    }

    pub fn schedule_after(&mut self, now: f64, delay_ms: f64, task: ScheduledTask) -> TaskHandle {
        self.schedule_at(now + delay_ms.max(0.0), task)
    }

    /// Remove a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    /// Pop the earliest task whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: f64) -> Option<(TaskHandle, ScheduledTask)> {
        let (handle, _) = self.tasks.first_key_value()?;
        if handle.due() > now {
            return None;
        }
        self.tasks.pop_first()
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.tasks.keys().next().map(TaskHandle::due)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, kind: TaskKind) -> ScheduledTask {
        ScheduledTask {
            tween: TweenId(id),
            kind,
        }
    }

    #[test]
    fn test_manual_clock_is_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(16.0);
        other.advance(4.0);
        assert_eq!(clock.now(), 20.0);
        clock.set(5.0);
        assert_eq!(other.now(), 5.0);
    }

    #[test]
    fn test_pop_due_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_at(30.0, task(1, TaskKind::Tick));
        queue.schedule_at(10.0, task(2, TaskKind::Begin));
        queue.schedule_at(10.0, task(3, TaskKind::Tick));

        assert_eq!(queue.next_deadline(), Some(10.0));
        assert!(queue.pop_due(5.0).is_none());

        let (_, first) = queue.pop_due(20.0).unwrap();
        let (_, second) = queue.pop_due(20.0).unwrap();
        assert_eq!(first.tween, TweenId(2));
        assert_eq!(second.tween, TweenId(3));
        assert!(queue.pop_due(20.0).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_cancel_is_immediate() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_after(0.0, 18.0, task(1, TaskKind::Tick));
        assert_eq!(handle.due(), 18.0);

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(queue.pop_due(100.0).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_negative_delay_is_clamped() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_after(50.0, -10.0, task(1, TaskKind::Begin));
        assert_eq!(handle.due(), 50.0);
    }
}
