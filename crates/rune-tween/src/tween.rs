//! The per-animation state machine.
//!
//! ```text
//! Pending --start--> Delayed --delay elapses--> Running --end time--> Completed
//!                      ^  |                       |
//!                      |  +--stop--+    +--stop---+
//!                      |           v    v
//!                      +--start-- Stopped
//!
//! any non-terminal state --discard--> Discarded
//! ```
//!
//! A tween never drives itself. Its pending work is a single task in the
//! shared [`TimerQueue`]; the registry pops due tasks and hands them back to
//! [`Tween::run_task`]. Time already spent animating survives pauses in
//! `elapsed_time`, so `end_time - start_time == duration - elapsed_time`
//! holds while running.

use tracing::{debug, trace};

use crate::error::{Result, TweenError};
use crate::params::{Callback, TweenParams, bind_args};
use crate::process::{DirectProcess, Process, StyleProcess, Timing};
use crate::scheduler::{ScheduledTask, TaskHandle, TaskKind, TimerQueue};
use crate::settings::TweenerSettings;
use crate::style::{StyleAdapter, StyleDeclarations, is_style_tweenable};
use crate::target::{AnimationTarget, PropertyTarget, PropertyValue};
use crate::types::{TweenId, TweenState};

/// Result of running one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tween is still alive (delayed, running or stopped).
    Continue,
    /// The tween reached its end time; it must leave the registry.
    Completed,
}

/// One animation bound to a target.
pub struct Tween<E> {
    id: TweenId,
    target: AnimationTarget<E>,
    timing: Timing,
    /// Milliseconds, re-applied on every start.
    delay: f64,
    processes: Vec<Process>,
    finishing_properties: Vec<(String, f64)>,
    finishing_styles: StyleDeclarations,
    on_start: Option<Callback<E>>,
    on_update: Option<Callback<E>>,
    on_complete: Option<Callback<E>>,
    state: TweenState,
    start_time: f64,
    end_time: f64,
    elapsed_time: f64,
    timer: Option<TaskHandle>,
}

impl<E> Tween<E> {
    pub fn id(&self) -> TweenId {
        self.id
    }

    pub fn target(&self) -> &AnimationTarget<E> {
        &self.target
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    /// Duration in milliseconds.
    pub fn duration(&self) -> f64 {
        self.timing.duration
    }

    /// Delay in milliseconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Animation time consumed by earlier run segments.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Whether a task for this tween is waiting in the queue.
    pub fn has_pending_task(&self) -> bool {
        self.timer.is_some()
    }

    /// Names of the animated properties: plain ones first, then styles.
    pub fn property_names(&self) -> Vec<String> {
        self.finishing_properties
            .iter()
            .map(|(name, _)| name.clone())
            .chain(self.finishing_styles.iter().map(|(name, _)| name.clone()))
            .collect()
    }
}

impl<E: PropertyTarget + 'static> Tween<E> {
    /// Build a tween and its processes.
    ///
    /// Plain properties become [`DirectProcess`]es in declaration order.
    /// On an element, tweenable style names are collected into one
    /// [`StyleProcess`] appended after them.
    pub(crate) fn build<A>(
        id: TweenId,
        target: AnimationTarget<E>,
        params: TweenParams<E>,
        settings: &TweenerSettings,
        adapter: &A,
    ) -> Result<Self>
    where
        A: StyleAdapter<Element = E>,
    {
        let transition = params.resolve_transition(settings)?;
        let duration = params.duration_ms(settings);
        let delay = params.delay_ms(settings);
        if !duration.is_finite() || !delay.is_finite() {
            return Err(TweenError::InvalidParameter(format!(
                "time and delay must be finite, got {duration}ms and {delay}ms"
            )));
        }
        let timing = Timing::new(transition, duration);

        let (bucket, direct): (Vec<_>, Vec<_>) = params
            .properties
            .into_iter()
            .partition(|(property, _)| target.is_element() && is_style_tweenable(property));

        // Styles first: their build can fail and must leave the target as
        // it was. Direct builds write coerced values back.
        let mut style = None;
        let mut finishing_styles = Vec::new();
        if let (AnimationTarget::Element(element), false) = (&target, bucket.is_empty()) {
            let (process, finals) =
                StyleProcess::build(adapter, &element.borrow(), &bucket, timing.clone())?;
            style = Some(Process::Style(process));
            finishing_styles = finals;
        }

        let mut processes = Vec::with_capacity(direct.len() + 1);
        let mut finishing_properties = Vec::with_capacity(direct.len());
        for (property, future) in direct {
            let (process, finish) = target.with_properties(|t| {
                DirectProcess::build(t, &property, &future, timing.clone())
            });
            processes.push(Process::Direct(process));
            finishing_properties.push((property, finish));
        }
        processes.extend(style);

        debug!(
            tween = %id,
            processes = processes.len(),
            duration_ms = duration,
            delay_ms = delay,
            "tween created"
        );

        Ok(Self {
            id,
            target,
            timing,
            delay,
            processes,
            finishing_properties,
            finishing_styles,
            on_start: bind_args(params.on_start, params.on_start_params),
            on_update: bind_args(params.on_update, params.on_update_params),
            on_complete: bind_args(params.on_complete, params.on_complete_params),
            state: TweenState::Pending,
            start_time: 0.0,
            end_time: 0.0,
            elapsed_time: 0.0,
            timer: None,
        })
    }

    /// Start or resume.
    ///
    /// Timing is anchored here: `end_time = now + duration - elapsed_time`,
    /// and the delay runs inside that window. Returns false when already
    /// running, or when no animation time is left; nothing is scheduled in
    /// that case. Otherwise the begin task is scheduled after the delay,
    /// replacing any pending task.
    pub(crate) fn start(&mut self, now: f64, queue: &mut TimerQueue) -> bool {
        if self.state == TweenState::Running || self.state.is_terminal() {
            return false;
        }
        self.cancel_timer(queue);

        let end_time = now + self.timing.duration - self.elapsed_time;
        if end_time <= now {
            debug!(tween = %self.id, "no animation time left, not starting");
            return false;
        }
        self.start_time = now;
        self.end_time = end_time;

        let task = ScheduledTask {
            tween: self.id,
            kind: TaskKind::Begin,
        };
        self.timer = Some(queue.schedule_after(now, self.delay, task));
        self.state = TweenState::Delayed;
        debug!(
            tween = %self.id,
            elapsed_ms = self.elapsed_time,
            delay_ms = self.delay,
            "tween started"
        );
        true
    }

    /// Pause. Cancels the pending task and returns false unless running.
    pub(crate) fn stop(&mut self, now: f64, queue: &mut TimerQueue) -> bool {
        self.cancel_timer(queue);
        match self.state {
            TweenState::Running => {
                self.elapsed_time += now - self.start_time;
                self.state = TweenState::Stopped;
                debug!(tween = %self.id, elapsed_ms = self.elapsed_time, "tween stopped");
                true
            }
            TweenState::Delayed => {
                self.state = TweenState::Stopped;
                false
            }
            _ => false,
        }
    }

    /// Stop for good. The caller removes the tween from the registry.
    pub(crate) fn discard(&mut self, now: f64, queue: &mut TimerQueue) {
        self.stop(now, queue);
        self.state = TweenState::Discarded;
        debug!(tween = %self.id, "tween discarded");
    }

    /// Run a task popped from the queue for this tween.
    pub(crate) fn run_task<A>(
        &mut self,
        kind: TaskKind,
        now: f64,
        queue: &mut TimerQueue,
        settings: &TweenerSettings,
        adapter: &A,
    ) -> TickOutcome
    where
        A: StyleAdapter<Element = E>,
    {
        self.timer = None;
        match (kind, self.state) {
            (TaskKind::Begin, TweenState::Delayed) => {
                self.begin();
                self.event_loop(now, queue, settings, adapter)
            }
            (TaskKind::Tick, TweenState::Running) => self.event_loop(now, queue, settings, adapter),
            _ => {
                trace!(tween = %self.id, ?kind, state = ?self.state, "stale task ignored");
                TickOutcome::Continue
            }
        }
    }

    /// The delay has elapsed. Timing stays anchored at `start`, so the
    /// delay is part of the animation time.
    fn begin(&mut self) {
        if let Some(callback) = self.on_start.as_mut() {
            callback.invoke(&self.target);
        }
        self.state = TweenState::Running;
    }

    fn event_loop<A>(
        &mut self,
        now: f64,
        queue: &mut TimerQueue,
        settings: &TweenerSettings,
        adapter: &A,
    ) -> TickOutcome
    where
        A: StyleAdapter<Element = E>,
    {
        if now >= self.end_time {
            self.finish(now, queue, adapter);
            return TickOutcome::Completed;
        }

        let elapsed = now - self.start_time + self.elapsed_time;
        trace!(tween = %self.id, elapsed_ms = elapsed, "tick");
        for process in &self.processes {
            match process {
                Process::Direct(p) => self.target.with_properties(|t| p.apply(t, elapsed)),
                Process::Style(p) => {
                    if let AnimationTarget::Element(element) = &self.target {
                        p.apply(adapter, &mut element.borrow_mut(), elapsed);
                    }
                }
            }
        }
        if let Some(callback) = self.on_update.as_mut() {
            callback.invoke(&self.target);
        }

        // The update callback may not reach the tweener, so the state is
        // still Running here.
        let task = ScheduledTask {
            tween: self.id,
            kind: TaskKind::Tick,
        };
        self.timer = Some(queue.schedule_after(now, settings.frame_interval(), task));
        TickOutcome::Continue
    }

    /// Snap every property to its exact destination and fire the final
    /// update and completion callbacks.
    fn finish<A>(&mut self, now: f64, queue: &mut TimerQueue, adapter: &A)
    where
        A: StyleAdapter<Element = E>,
    {
        self.stop(now, queue);

        if let AnimationTarget::Element(element) = &self.target {
            let mut element = element.borrow_mut();
            for (property, value) in &self.finishing_styles {
                adapter.set(&mut element, property, value);
            }
        }
        self.target.with_properties(|t| {
            for (property, value) in &self.finishing_properties {
                t.set_property(property, PropertyValue::Number(*value));
            }
        });

        if let Some(callback) = self.on_update.as_mut() {
            callback.invoke(&self.target);
        }
        if let Some(callback) = self.on_complete.as_mut() {
            callback.invoke(&self.target);
        }
        self.state = TweenState::Completed;
        debug!(tween = %self.id, "tween completed");
    }

    fn cancel_timer(&mut self, queue: &mut TimerQueue) {
        if let Some(handle) = self.timer.take() {
            queue.cancel(handle);
        }
    }
}

impl<E> std::fmt::Debug for Tween<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("duration", &self.timing.duration)
            .field("delay", &self.delay)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .field("elapsed_time", &self.elapsed_time)
            .field("processes", &self.processes.len())
            .finish_non_exhaustive()
    }
}
