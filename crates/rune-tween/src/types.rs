//! Identifiers and lifecycle states shared by tweens and the registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a tween, unique for the lifetime of its [`Tweener`].
///
/// Renders as `tw-<n>` and parses back from that form.
///
/// [`Tweener`]: crate::registry::Tweener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TweenId(pub u64);

impl fmt::Display for TweenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tw-{}", self.0)
    }
}

impl FromStr for TweenId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("tw-").unwrap_or(s).parse().map(TweenId)
    }
}

/// Current state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenState {
    /// Constructed, never started.
    Pending,
    /// `start()` called, waiting out the delay.
    Delayed,
    /// Ticking.
    Running,
    /// Paused; resumable with `start()`.
    Stopped,
    /// Reached its end time and fired its completion callback.
    Completed,
    /// Removed before completion.
    Discarded,
}

impl Default for TweenState {
    fn default() -> Self {
        Self::Pending
    }
}

impl TweenState {
    /// Terminal states never tick again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Discarded)
    }
}
