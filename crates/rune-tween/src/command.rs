//! Registry requests queued from callbacks.
//!
//! Callbacks fire while the [`Tweener`](crate::Tweener) is running tasks, so
//! they cannot reach it directly. Instead they push [`TweenCommand`]s onto a
//! [`TweenCommands`] handle obtained from [`Tweener::commands`](crate::Tweener::commands);
//! the tweener applies them in order once the current `run_due` pass is over.
//!
//! ```ignore
//! let commands = tweener.commands();
//! let params = TweenParams::new()
//!     .property("x", 100)
//!     .on_complete(Callback::new(move |target, _| {
//!         commands.add_tween(target.clone(), TweenParams::new().property("x", 0), false);
//!     }));
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::params::TweenParams;
use crate::target::AnimationTarget;
use crate::types::TweenId;

/// A deferred registry operation.
pub enum TweenCommand<E> {
    Add {
        target: AnimationTarget<E>,
        params: TweenParams<E>,
        defer_start: bool,
    },
    Start(TweenId),
    Stop(TweenId),
    Discard(TweenId),
    PauseTweens(AnimationTarget<E>),
    ResumeTweens(AnimationTarget<E>),
    RemoveTweens(AnimationTarget<E>),
    PauseAll,
    ResumeAll,
    RemoveAll,
}

impl<E> fmt::Debug for TweenCommand<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add {
                params,
                defer_start,
                ..
            } => f
                .debug_struct("Add")
                .field("params", params)
                .field("defer_start", defer_start)
                .finish_non_exhaustive(),
            Self::Start(id) => f.debug_tuple("Start").field(id).finish(),
            Self::Stop(id) => f.debug_tuple("Stop").field(id).finish(),
            Self::Discard(id) => f.debug_tuple("Discard").field(id).finish(),
            Self::PauseTweens(_) => f.write_str("PauseTweens"),
            Self::ResumeTweens(_) => f.write_str("ResumeTweens"),
            Self::RemoveTweens(_) => f.write_str("RemoveTweens"),
            Self::PauseAll => f.write_str("PauseAll"),
            Self::ResumeAll => f.write_str("ResumeAll"),
            Self::RemoveAll => f.write_str("RemoveAll"),
        }
    }
}

/// Shared, cloneable queue of [`TweenCommand`]s.
pub struct TweenCommands<E> {
    queue: Rc<RefCell<VecDeque<TweenCommand<E>>>>,
}

impl<E> Clone for TweenCommands<E> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<E> Default for TweenCommands<E> {
    fn default() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<E> fmt::Debug for TweenCommands<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenCommands")
            .field("pending", &self.len())
            .finish()
    }
}

impl<E> TweenCommands<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: TweenCommand<E>) {
        self.queue.borrow_mut().push_back(command);
    }

    /// Queue a new tween. Construction errors are logged when applied.
    pub fn add_tween(&self, target: AnimationTarget<E>, params: TweenParams<E>, defer_start: bool) {
        self.push(TweenCommand::Add {
            target,
            params,
            defer_start,
        });
    }

    pub fn start_tween(&self, id: TweenId) {
        self.push(TweenCommand::Start(id));
    }

    pub fn stop_tween(&self, id: TweenId) {
        self.push(TweenCommand::Stop(id));
    }

    pub fn discard_tween(&self, id: TweenId) {
        self.push(TweenCommand::Discard(id));
    }

    pub fn pause_tweens(&self, target: AnimationTarget<E>) {
        self.push(TweenCommand::PauseTweens(target));
    }

    pub fn resume_tweens(&self, target: AnimationTarget<E>) {
        self.push(TweenCommand::ResumeTweens(target));
    }

    pub fn remove_tweens(&self, target: AnimationTarget<E>) {
        self.push(TweenCommand::RemoveTweens(target));
    }

    pub fn pause_all_tweens(&self) {
        self.push(TweenCommand::PauseAll);
    }

    pub fn resume_all_tweens(&self) {
        self.push(TweenCommand::ResumeAll);
    }

    pub fn remove_all_tweens(&self) {
        self.push(TweenCommand::RemoveAll);
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub(crate) fn pop(&self) -> Option<TweenCommand<E>> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drop every pending command. Queued params may hold callbacks that
    /// hold this queue.
    pub(crate) fn clear(&self) {
        let pending = std::mem::take(&mut *self.queue.borrow_mut());
        drop(pending);
    }
}
