//! Time-based property tweening.
//!
//! Given a target, a set of destination values, a duration and an easing
//! curve, a tween mutates the target's properties frame by frame until they
//! reach their destinations, then fires its lifecycle callbacks.
//!
//! # Architecture
//!
//! ```text
//! Tweener (registry + lifecycle)
//!   ├── TimerQueue (one cancelable task per tween) ← Clock
//!   └── Tween (state machine)
//!         ├── DirectProcess  (plain property, assigned directly)
//!         └── StyleProcess   (all tweenable styles, one bulk write) → StyleAdapter
//!
//! Callback ──push──> TweenCommands ──applied after run_due──> Tweener
//! ```
//!
//! Plain objects and styled elements are distinguished up front by
//! [`AnimationTarget`]. Values are parsed and re-serialized by [`value`];
//! curves come from [`easing`].

pub mod command;
pub mod easing;
pub mod error;
pub mod params;
pub mod process;
pub mod registry;
pub mod scheduler;
pub mod settings;
pub mod style;
pub mod target;
pub mod tween;
pub mod types;
pub mod value;

pub use command::{TweenCommand, TweenCommands};
pub use easing::{Easing, EasingParams, Transition};
pub use error::{Result, TweenError};
pub use params::{Callback, TransitionParam, TweenParams};
pub use process::{DirectProcess, Process, StyleProcess, Timing};
pub use registry::{TweenQuery, Tweener, TweenerState};
pub use scheduler::{Clock, ManualClock, SystemClock, TaskHandle, TimerQueue};
pub use settings::TweenerSettings;
pub use style::{InlineStyleAdapter, MemoryElement, STYLE_NAMES, StyleAdapter};
pub use target::{AnimationTarget, ObjectRef, PropertyMap, PropertyTarget, PropertyValue};
pub use tween::{TickOutcome, Tween};
pub use types::{TweenId, TweenState};
pub use value::{ParsedValue, Unit};
