//! Animation targets.
//!
//! A tween never owns what it animates. Targets are shared handles
//! (`Rc<RefCell<..>>`) whose lifetime is independent of the tween; the tween
//! only borrows them for the duration of a tick.
//!
//! Two kinds of target exist, decided when the tween is built:
//! - [`AnimationTarget::Object`]: a plain property bag; every property is
//!   assigned directly.
//! - [`AnimationTarget::Element`]: a styled element; tweenable CSS names go
//!   through the [`StyleAdapter`], anything else is assigned directly.
//!
//! [`StyleAdapter`]: crate::style::StyleAdapter

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::types::TweenId;
use crate::value::parse_number;

/// A property value as stored on a target or requested by a tween.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl PropertyValue {
    /// Numeric reading; text goes through the forgiving number parse.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_number(s),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Something whose named properties can be read and assigned.
///
/// The tag accessors are the side channel the registry uses to find the
/// tween currently bound to a target; hosts store the id however they like.
pub trait PropertyTarget {
    fn property(&self, name: &str) -> Option<PropertyValue>;
    fn set_property(&mut self, name: &str, value: PropertyValue);
    fn tween_tag(&self) -> Option<TweenId>;
    fn set_tween_tag(&mut self, tag: Option<TweenId>);
}

/// Read a property as a number, writing the coerced number back.
///
/// Missing properties become `0`; text is reduced to its first number.
pub fn smooth_value(target: &mut dyn PropertyTarget, name: &str) -> f64 {
    match target.property(name) {
        Some(PropertyValue::Number(n)) => n,
        Some(text) => {
            let n = text.to_number();
            target.set_property(name, PropertyValue::Number(n));
            n
        }
        None => {
            target.set_property(name, PropertyValue::Number(0.0));
            0.0
        }
    }
}

/// In-memory property bag, the plain-object target.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    values: HashMap<String, PropertyValue>,
    tag: Option<TweenId>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(PropertyValue::as_number)
    }

    pub fn insert(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.values.insert(name.to_string(), value.into());
    }
}

impl PropertyTarget for PropertyMap {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.values.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.values.insert(name.to_string(), value);
    }

    fn tween_tag(&self) -> Option<TweenId> {
        self.tag
    }

    fn set_tween_tag(&mut self, tag: Option<TweenId>) {
        self.tag = tag;
    }
}

/// Shared handle to a plain-object target.
pub type ObjectRef = Rc<RefCell<dyn PropertyTarget>>;

/// What a tween animates: a plain object or a styled element of type `E`.
pub enum AnimationTarget<E> {
    Object(ObjectRef),
    Element(Rc<RefCell<E>>),
}

impl<E: PropertyTarget + 'static> AnimationTarget<E> {
    pub fn object<T: PropertyTarget + 'static>(target: Rc<RefCell<T>>) -> Self {
        Self::Object(target)
    }

    pub fn element(element: Rc<RefCell<E>>) -> Self {
        Self::Element(element)
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Run `f` with the target borrowed as a plain property target.
    pub fn with_properties<R>(&self, f: impl FnOnce(&mut dyn PropertyTarget) -> R) -> R {
        match self {
            Self::Object(obj) => f(&mut *obj.borrow_mut()),
            Self::Element(el) => f(&mut *el.borrow_mut()),
        }
    }

    pub fn tween_tag(&self) -> Option<TweenId> {
        match self {
            Self::Object(obj) => obj.borrow().tween_tag(),
            Self::Element(el) => el.borrow().tween_tag(),
        }
    }

    pub fn set_tween_tag(&self, tag: Option<TweenId>) {
        self.with_properties(|t| t.set_tween_tag(tag));
    }

    /// Whether both handles point at the same target.
    pub fn same_target(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Element(a), Self::Element(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<E> Clone for AnimationTarget<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Object(obj) => Self::Object(Rc::clone(obj)),
            Self::Element(el) => Self::Element(Rc::clone(el)),
        }
    }
}

impl<E> fmt::Debug for AnimationTarget<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(_) => f.write_str("AnimationTarget::Object(..)"),
            Self::Element(_) => f.write_str("AnimationTarget::Element(..)"),
        }
    }
}
