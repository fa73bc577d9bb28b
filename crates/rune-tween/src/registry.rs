//! The tween registry and scheduler driver.
//!
//! [`Tweener`] owns every live tween, the shared [`TimerQueue`] and the
//! clock. It is an explicit object with an explicit lifecycle:
//!
//! ```ignore
//! let mut tweener = Tweener::new(SystemClock::new()).with_style_adapter(InlineStyleAdapter);
//! tweener.init()?;
//!
//! let id = tweener.add_tween(target.clone(), TweenParams::new().property("x", 100), false)?;
//!
//! // Host loop: sleep until the next deadline, then fire due tasks.
//! while !tweener.is_idle() {
//!     tweener.run_due();
//! }
//! tweener.shutdown();
//! ```
//!
//! Callbacks cannot call the tweener while it runs them; they queue
//! requests on [`Tweener::commands`] instead, applied after each `run_due`.
//!
//! Each tween is tagged on its target with its id so it can be found again
//! by target. A target holds one tag: adding a second tween to it re-tags
//! it, and the earlier tween stays reachable only by id.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::command::{TweenCommand, TweenCommands};
use crate::error::{Result, TweenError};
use crate::params::TweenParams;
use crate::scheduler::{Clock, TimerQueue};
use crate::settings::TweenerSettings;
use crate::style::StyleAdapter;
use crate::target::AnimationTarget;
use crate::tween::{TickOutcome, Tween};
use crate::types::TweenId;

/// Lifecycle of a [`Tweener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenerState {
    /// Created or shut down; tweens cannot be added.
    #[default]
    NotReady,
    /// `init()` succeeded.
    Ready,
}

/// Criteria for [`Tweener::find_tween`].
#[derive(Debug)]
pub enum TweenQuery<'a, E> {
    Id(TweenId),
    /// An id in its `tw-<n>` string form.
    Name(&'a str),
    Target(&'a AnimationTarget<E>),
}

impl<E> From<TweenId> for TweenQuery<'_, E> {
    fn from(id: TweenId) -> Self {
        Self::Id(id)
    }
}

impl<'a, E> From<&'a str> for TweenQuery<'a, E> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a, E> From<&'a AnimationTarget<E>> for TweenQuery<'a, E> {
    fn from(target: &'a AnimationTarget<E>) -> Self {
        Self::Target(target)
    }
}

impl<'a, E> From<&'a Tween<E>> for TweenQuery<'a, E> {
    fn from(tween: &'a Tween<E>) -> Self {
        Self::Id(tween.id())
    }
}

/// Registry of live tweens sharing one clock and one task queue.
pub struct Tweener<A: StyleAdapter> {
    clock: Box<dyn Clock>,
    settings: TweenerSettings,
    adapter: Option<A>,
    state: TweenerState,
    tweens: BTreeMap<TweenId, Tween<A::Element>>,
    queue: TimerQueue,
    commands: TweenCommands<A::Element>,
    next_id: u64,
}

impl<A: StyleAdapter> Tweener<A> {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            settings: TweenerSettings::default(),
            adapter: None,
            state: TweenerState::NotReady,
            tweens: BTreeMap::new(),
            queue: TimerQueue::new(),
            commands: TweenCommands::new(),
            next_id: 0,
        }
    }

    pub fn with_settings(mut self, settings: TweenerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_style_adapter(mut self, adapter: A) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Replace the style adapter. Existing tweens keep their processes.
    pub fn set_style_adapter(&mut self, adapter: A) {
        self.adapter = Some(adapter);
    }

    /// Make the tweener ready. Fails without a style adapter.
    pub fn init(&mut self) -> Result<()> {
        if self.adapter.is_none() {
            return Err(TweenError::Configuration(
                "no style adapter configured".into(),
            ));
        }
        if self.state != TweenerState::Ready {
            self.state = TweenerState::Ready;
            debug!(
                fps = self.settings.fps,
                frame_interval_ms = self.settings.frame_interval(),
                "tweener initialized"
            );
        }
        Ok(())
    }

    /// Discard every tween and return to the not-ready state.
    pub fn shutdown(&mut self) {
        let removed = self.tweens.len();
        self.remove_all_tweens();
        self.queue.clear();
        self.commands.clear();
        self.state = TweenerState::NotReady;
        debug!(removed, "tweener shut down");
    }

    pub fn state(&self) -> TweenerState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == TweenerState::Ready
    }

    pub fn settings(&self) -> &TweenerSettings {
        &self.settings
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Handle for queueing registry operations from callbacks.
    pub fn commands(&self) -> TweenCommands<A::Element> {
        self.commands.clone()
    }

    /// Create a tween for `target`, tag the target with its id and, unless
    /// `defer_start` is set, start it.
    pub fn add_tween(
        &mut self,
        target: AnimationTarget<A::Element>,
        params: TweenParams<A::Element>,
        defer_start: bool,
    ) -> Result<TweenId> {
        let adapter = match (&self.adapter, self.state) {
            (Some(adapter), TweenerState::Ready) => adapter,
            _ => {
                return Err(TweenError::Configuration(
                    "tweener is not initialized".into(),
                ));
            }
        };

        let id = TweenId(self.next_id);
        let mut tween = Tween::build(id, target, params, &self.settings, adapter)?;
        self.next_id += 1;

        if let Some(previous) = tween.target().tween_tag() {
            if previous != id && self.tweens.contains_key(&previous) {
                warn!(tween = %id, %previous, "target already tweening, re-tagging");
            }
        }
        tween.target().set_tween_tag(Some(id));

        if !defer_start {
            let now = self.clock.now();
            tween.start(now, &mut self.queue);
        }
        self.tweens.insert(id, tween);
        Ok(id)
    }

    /// Resolve a tween id. Unknown ids and untagged targets give `None`.
    pub fn find_tween<'a>(&self, query: impl Into<TweenQuery<'a, A::Element>>) -> Option<TweenId>
    where
        A::Element: 'a,
    {
        let id = match query.into() {
            TweenQuery::Id(id) => id,
            TweenQuery::Name(name) => name.parse().ok()?,
            TweenQuery::Target(target) => target.tween_tag()?,
        };
        self.tweens.contains_key(&id).then_some(id)
    }

    pub fn tween(&self, id: TweenId) -> Option<&Tween<A::Element>> {
        self.tweens.get(&id)
    }

    pub fn tween_ids(&self) -> Vec<TweenId> {
        self.tweens.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Names of the properties animated on `target`, including delayed and
    /// paused tweens.
    pub fn get_tweens(&self, target: &AnimationTarget<A::Element>) -> Vec<String> {
        self.find_tween(target)
            .and_then(|id| self.tweens.get(&id))
            .map(Tween::property_names)
            .unwrap_or_default()
    }

    /// Whether `target` has a tween, delayed and paused ones included.
    pub fn is_tweening(&self, target: &AnimationTarget<A::Element>) -> bool {
        self.find_tween(target).is_some()
    }

    pub fn start_tween(&mut self, id: TweenId) -> bool {
        let now = self.clock.now();
        match self.tweens.get_mut(&id) {
            Some(tween) => tween.start(now, &mut self.queue),
            None => false,
        }
    }

    pub fn stop_tween(&mut self, id: TweenId) -> bool {
        let now = self.clock.now();
        match self.tweens.get_mut(&id) {
            Some(tween) => tween.stop(now, &mut self.queue),
            None => false,
        }
    }

    /// Stop a tween for good and remove it. Returns false if unknown.
    pub fn discard_tween(&mut self, id: TweenId) -> bool {
        let now = self.clock.now();
        let Some(mut tween) = self.tweens.remove(&id) else {
            return false;
        };
        tween.discard(now, &mut self.queue);
        Self::release_tag(&tween);
        true
    }

    pub fn pause_all_tweens(&mut self) -> bool {
        let now = self.clock.now();
        let mut paused = 0;
        for tween in self.tweens.values_mut() {
            if tween.stop(now, &mut self.queue) {
                paused += 1;
            }
        }
        debug!(paused, "paused all tweens");
        paused > 0
    }

    pub fn resume_all_tweens(&mut self) -> bool {
        let now = self.clock.now();
        let mut resumed = 0;
        for tween in self.tweens.values_mut() {
            if tween.start(now, &mut self.queue) {
                resumed += 1;
            }
        }
        debug!(resumed, "resumed all tweens");
        resumed > 0
    }

    /// Discard every tween, delayed and paused ones included.
    pub fn remove_all_tweens(&mut self) -> bool {
        let now = self.clock.now();
        let tweens = std::mem::take(&mut self.tweens);
        let removed = tweens.len();
        for (_, mut tween) in tweens {
            tween.discard(now, &mut self.queue);
            Self::release_tag(&tween);
        }
        debug!(removed, "removed all tweens");
        removed > 0
    }

    pub fn pause_tweens(&mut self, target: &AnimationTarget<A::Element>) -> bool {
        self.find_tween(target)
            .is_some_and(|id| self.stop_tween(id))
    }

    pub fn resume_tweens(&mut self, target: &AnimationTarget<A::Element>) -> bool {
        self.find_tween(target)
            .is_some_and(|id| self.start_tween(id))
    }

    pub fn remove_tweens(&mut self, target: &AnimationTarget<A::Element>) -> bool {
        self.find_tween(target)
            .is_some_and(|id| self.discard_tween(id))
    }

    /// Fire every task whose deadline has passed, then apply queued
    /// commands. Time is read once, so ticks scheduled while running are
    /// left for the next call.
    ///
    /// Returns the number of tasks fired.
    pub fn run_due(&mut self) -> usize {
        let Some(adapter) = self.adapter.as_ref() else {
            return 0;
        };
        let now = self.clock.now();
        let mut fired = 0;
        let mut completed = Vec::new();

        while let Some((_, task)) = self.queue.pop_due(now) {
            fired += 1;
            let Some(tween) = self.tweens.get_mut(&task.tween) else {
                continue;
            };
            let outcome = tween.run_task(task.kind, now, &mut self.queue, &self.settings, adapter);
            if outcome == TickOutcome::Completed {
                completed.push(task.tween);
            }
        }

        for id in completed {
            if let Some(tween) = self.tweens.remove(&id) {
                Self::release_tag(&tween);
            }
        }
        self.apply_commands();
        fired
    }

    /// Apply queued commands in order, including ones queued while
    /// applying. Returns how many were applied.
    pub fn apply_commands(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.commands.pop() {
            applied += 1;
            match command {
                TweenCommand::Add {
                    target,
                    params,
                    defer_start,
                } => {
                    if let Err(err) = self.add_tween(target, params, defer_start) {
                        warn!(%err, "queued tween rejected");
                    }
                }
                TweenCommand::Start(id) => {
                    self.start_tween(id);
                }
                TweenCommand::Stop(id) => {
                    self.stop_tween(id);
                }
                TweenCommand::Discard(id) => {
                    self.discard_tween(id);
                }
                TweenCommand::PauseTweens(target) => {
                    self.pause_tweens(&target);
                }
                TweenCommand::ResumeTweens(target) => {
                    self.resume_tweens(&target);
                }
                TweenCommand::RemoveTweens(target) => {
                    self.remove_tweens(&target);
                }
                TweenCommand::PauseAll => {
                    self.pause_all_tweens();
                }
                TweenCommand::ResumeAll => {
                    self.resume_all_tweens();
                }
                TweenCommand::RemoveAll => {
                    self.remove_all_tweens();
                }
            }
        }
        if applied > 0 {
            debug!(applied, "applied queued commands");
        }
        applied
    }

    /// Deadline of the next scheduled task, in clock milliseconds.
    pub fn next_deadline(&self) -> Option<f64> {
        self.queue.next_deadline()
    }

    /// True when no task is scheduled and no command is queued. Paused
    /// tweens do not keep the tweener busy.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty() && self.commands.is_empty()
    }

    /// Clear the target's tag if it still names this tween.
    fn release_tag(tween: &Tween<A::Element>) {
        if tween.target().tween_tag() == Some(tween.id()) {
            tween.target().set_tween_tag(None);
        }
    }
}

impl<A: StyleAdapter> Drop for Tweener<A> {
    fn drop(&mut self) {
        self.commands.clear();
        if !self.tweens.is_empty() {
            self.shutdown();
        }
    }
}
