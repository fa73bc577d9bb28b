//! Tween parameters: timing, easing, lifecycle callbacks and the
//! destination values to animate towards.
//!
//! Parameters are built either with the builder methods on [`TweenParams`]
//! or from a JSON object with [`TweenParams::from_json`], which accepts the
//! classic shape:
//!
//! ```text
//! { "time": 0.5, "transition": "easeInOutQuad", "delay": 0, "x": 100, "color": "#f80" }
//! ```
//!
//! The keys in [`PARAMETER_KEYS`] configure the tween; every other key is a
//! property to animate, in declaration order. `onStartParams`,
//! `onUpdateParams` and `onCompleteParams` carry callback arguments. The
//! callbacks themselves are attached with the builder methods.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::easing::{Easing, Transition};
use crate::error::{Result, TweenError};
use crate::settings::TweenerSettings;
use crate::target::{AnimationTarget, PropertyValue};
use crate::value::parse_number;

/// Parameter keys that are never animated.
pub const PARAMETER_KEYS: [&str; 9] = [
    "time",
    "transition",
    "delay",
    "onStart",
    "onStartParams",
    "onUpdate",
    "onUpdateParams",
    "onComplete",
    "onCompleteParams",
];

/// Handler invoked with the target and the callback's argument list.
pub type CallbackFn<E> = dyn FnMut(&AnimationTarget<E>, &[Value]);

/// A lifecycle callback and its arguments.
pub struct Callback<E> {
    handler: Box<CallbackFn<E>>,
    args: Vec<Value>,
}

impl<E> Callback<E> {
    pub fn new(handler: impl FnMut(&AnimationTarget<E>, &[Value]) + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            args: Vec::new(),
        }
    }

    /// Attach arguments. An array is used as the argument list, a falsy
    /// value means no arguments, anything else is a single argument.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = normalize_args(args);
        self
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn invoke(&mut self, target: &AnimationTarget<E>) {
        (self.handler)(target, &self.args);
    }
}

impl<E> fmt::Debug for Callback<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

fn normalize_args(args: Value) -> Vec<Value> {
    match args {
        Value::Array(list) => list,
        other if is_falsy(&other) => Vec::new(),
        other => vec![other],
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|n| n == 0.0 || n.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// A requested easing: a name resolved when the tween is built, or a
/// ready transition.
#[derive(Debug, Clone)]
pub enum TransitionParam {
    Name(String),
    Transition(Transition),
}

impl TransitionParam {
    pub fn resolve(&self) -> Result<Transition> {
        match self {
            Self::Name(name) => Easing::from_name(name).map(Transition::Named).ok_or_else(|| {
                TweenError::InvalidParameter(format!("unknown transition: {name:?}"))
            }),
            Self::Transition(t) => Ok(t.clone()),
        }
    }
}

impl From<&str> for TransitionParam {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TransitionParam {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Easing> for TransitionParam {
    fn from(e: Easing) -> Self {
        Self::Transition(e.into())
    }
}

impl From<Transition> for TransitionParam {
    fn from(t: Transition) -> Self {
        Self::Transition(t)
    }
}

/// Everything needed to build one tween. Unset fields fall back to the
/// tweener's [`TweenerSettings`].
pub struct TweenParams<E> {
    /// Duration in seconds.
    pub time: Option<f64>,
    /// Start delay in seconds.
    pub delay: Option<f64>,
    pub transition: Option<TransitionParam>,
    pub on_start: Option<Callback<E>>,
    pub on_update: Option<Callback<E>>,
    pub on_complete: Option<Callback<E>>,
    /// Arguments replacing those of the matching callback.
    pub on_start_params: Option<Value>,
    pub on_update_params: Option<Value>,
    pub on_complete_params: Option<Value>,
    /// Destination values, in declaration order.
    pub properties: Vec<(String, PropertyValue)>,
}

impl<E> Default for TweenParams<E> {
    fn default() -> Self {
        Self {
            time: None,
            delay: None,
            transition: None,
            on_start: None,
            on_update: None,
            on_complete: None,
            on_start_params: None,
            on_update_params: None,
            on_complete_params: None,
            properties: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for TweenParams<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenParams")
            .field("time", &self.time)
            .field("delay", &self.delay)
            .field("transition", &self.transition)
            .field("on_start", &self.on_start)
            .field("on_update", &self.on_update)
            .field("on_complete", &self.on_complete)
            .field("on_start_params", &self.on_start_params)
            .field("on_update_params", &self.on_update_params)
            .field("on_complete_params", &self.on_complete_params)
            .field("properties", &self.properties)
            .finish()
    }
}

impl<E> TweenParams<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `name` towards `value`. A repeated name replaces the earlier
    /// destination in place.
    pub fn property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((name.to_string(), value)),
        }
        self
    }

    pub fn time(mut self, seconds: f64) -> Self {
        self.time = Some(seconds);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = Some(seconds);
        self
    }

    pub fn transition(mut self, transition: impl Into<TransitionParam>) -> Self {
        self.transition = Some(transition.into());
        self
    }

    pub fn on_start(mut self, callback: Callback<E>) -> Self {
        self.on_start = Some(callback);
        self
    }

    pub fn on_update(mut self, callback: Callback<E>) -> Self {
        self.on_update = Some(callback);
        self
    }

    pub fn on_complete(mut self, callback: Callback<E>) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn on_start_params(mut self, args: Value) -> Self {
        self.on_start_params = Some(args);
        self
    }

    pub fn on_update_params(mut self, args: Value) -> Self {
        self.on_update_params = Some(args);
        self
    }

    pub fn on_complete_params(mut self, args: Value) -> Self {
        self.on_complete_params = Some(args);
        self
    }

    /// Parse the classic object form.
    ///
    /// Keys in [`PARAMETER_KEYS`] are consumed and never animated; a falsy
    /// value for one of them falls back to the default. A non-string
    /// `transition`, a non-numeric `time`/`delay`, or a property holding an
    /// array or object is an [`TweenError::InvalidParameter`]. `onStart`,
    /// `onUpdate` and `onComplete` cannot hold handlers in JSON and are
    /// ignored. `null` properties are skipped.
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(TweenError::InvalidParameter(format!(
                "tween params must be an object, got {value}"
            )));
        };

        let mut params = Self::new();
        for (key, value) in map {
            if !PARAMETER_KEYS.contains(&key.as_str()) {
                let value = match value {
                    Value::Null => continue,
                    Value::Bool(b) => PropertyValue::Number(if b { 1.0 } else { 0.0 }),
                    Value::Number(n) => PropertyValue::Number(n.as_f64().unwrap_or(0.0)),
                    Value::String(s) => PropertyValue::Text(s),
                    other => {
                        return Err(TweenError::InvalidParameter(format!(
                            "property {key:?} must be a number or a string, got {other}"
                        )));
                    }
                };
                params.properties.push((key, value));
                continue;
            }
            if is_falsy(&value) {
                continue;
            }
            match key.as_str() {
                "time" => params.time = Some(seconds_from_json(&key, &value)?),
                "delay" => params.delay = Some(seconds_from_json(&key, &value)?),
                "transition" => {
                    let Value::String(name) = value else {
                        return Err(TweenError::InvalidParameter(format!(
                            "transition must be a string or a function, got {value}"
                        )));
                    };
                    params.transition = Some(TransitionParam::Name(name));
                }
                "onStartParams" => params.on_start_params = Some(value),
                "onUpdateParams" => params.on_update_params = Some(value),
                "onCompleteParams" => params.on_complete_params = Some(value),
                _ => debug!(key = %key, "callback handlers cannot come from JSON, ignored"),
            }
        }
        Ok(params)
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self, settings: &TweenerSettings) -> f64 {
        self.time.unwrap_or(settings.time) * 1000.0
    }

    /// Delay in milliseconds.
    pub fn delay_ms(&self, settings: &TweenerSettings) -> f64 {
        self.delay.unwrap_or(settings.delay) * 1000.0
    }

    pub fn resolve_transition(&self, settings: &TweenerSettings) -> Result<Transition> {
        match &self.transition {
            Some(param) => param.resolve(),
            None => Ok(settings.transition.into()),
        }
    }
}

/// Attach `args` to `callback` when both are present.
pub(crate) fn bind_args<E>(callback: Option<Callback<E>>, args: Option<Value>) -> Option<Callback<E>> {
    match (callback, args) {
        (Some(callback), Some(args)) => Some(callback.with_args(args)),
        (callback, _) => callback,
    }
}

fn seconds_from_json(key: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(parse_number(s)),
        _ => None,
    }
    .ok_or_else(|| TweenError::InvalidParameter(format!("{key} must be a number, got {value}")))
}
