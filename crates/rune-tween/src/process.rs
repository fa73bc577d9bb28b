//! Per-property update steps.
//!
//! A tween owns an ordered list of [`Process`]es built once at construction.
//! Each one holds exactly the values it needs (start, delta, timing) and is
//! invoked with the elapsed animation time on every tick:
//!
//! - [`DirectProcess`] assigns one property on the target directly.
//! - [`StyleProcess`] batches every tweenable style of an element into a
//!   single [`StyleAdapter::bulk_set`] per tick.

use tracing::trace;

use crate::easing::Transition;
use crate::error::Result;
use crate::style::{StyleAdapter, StyleDeclarations, is_color_property};
use crate::target::{PropertyTarget, PropertyValue, smooth_value};
use crate::value::{
    Rgb, RgbDelta, compile_color, diff_color, format_css_number, parse_color, parse_value,
    reconcile_units, Unit,
};

/// Easing and duration shared by every process of one tween.
#[derive(Debug, Clone)]
pub struct Timing {
    pub transition: Transition,
    /// Milliseconds.
    pub duration: f64,
}

impl Timing {
    pub fn new(transition: Transition, duration: f64) -> Self {
        Self {
            transition,
            duration,
        }
    }

    #[inline]
    pub fn ease(&self, elapsed: f64, start: f64, delta: f64) -> f64 {
        self.transition.apply(elapsed, start, delta, self.duration)
    }
}

/// Assigns `property = ease(elapsed, start, delta)` on the target.
#[derive(Debug, Clone)]
pub struct DirectProcess {
    pub property: String,
    pub start: f64,
    pub delta: f64,
    timing: Timing,
}

impl DirectProcess {
    /// Read the current value off the target (coercing it to a number) and
    /// return the process together with the exact destination.
    pub fn build(
        target: &mut dyn PropertyTarget,
        property: &str,
        future: &PropertyValue,
        timing: Timing,
    ) -> (Self, f64) {
        let start = smooth_value(target, property);
        let future = future.to_number();
        let process = Self {
            property: property.to_string(),
            start,
            delta: future - start,
            timing,
        };
        (process, future)
    }

    pub fn apply(&self, target: &mut dyn PropertyTarget, elapsed: f64) {
        let value = self.timing.ease(elapsed, self.start, self.delta);
        target.set_property(&self.property, PropertyValue::Number(value));
    }
}

/// How one style property is interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleChannel {
    /// Three eased channels recompiled to `#rrggbb`.
    Color { start: Rgb, delta: RgbDelta },
    /// One eased number re-suffixed with its resolved unit.
    Scalar { start: f64, delta: f64, unit: Unit },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub property: String,
    pub channel: StyleChannel,
}

/// Every tweenable style of one element, written with one bulk call.
#[derive(Debug, Clone)]
pub struct StyleProcess {
    entries: Vec<StyleEntry>,
    timing: Timing,
}

impl StyleProcess {
    /// Build the batched process for `bucket`, reading current values
    /// through `adapter`. Returns the process and the exact finishing
    /// declarations.
    ///
    /// Fails with [`TweenError::ColorParse`](crate::error::TweenError::ColorParse)
    /// when a current or requested color cannot be parsed.
    pub fn build<A: StyleAdapter>(
        adapter: &A,
        element: &A::Element,
        bucket: &[(String, PropertyValue)],
        timing: Timing,
    ) -> Result<(Self, StyleDeclarations)> {
        let mut entries = Vec::with_capacity(bucket.len());
        let mut finals = Vec::with_capacity(bucket.len());

        for (property, requested) in bucket {
            let requested = requested.to_string();
            let current = adapter.get(element, property);

            let channel = if is_color_property(property) {
                let start = parse_color(&current)?;
                let future = parse_color(&requested)?;
                finals.push((property.clone(), requested));
                StyleChannel::Color {
                    start,
                    delta: diff_color(future, start),
                }
            } else {
                let mut current = parse_value(&current);
                let mut future = parse_value(&requested);
                reconcile_units(&mut current, &mut future);
                let unit = future.unit.unwrap_or(Unit::None);
                finals.push((property.clone(), future.to_css()));
                StyleChannel::Scalar {
                    start: current.value,
                    delta: future.value - current.value,
                    unit,
                }
            };

            trace!(property = %property, ?channel, "style entry");
            entries.push(StyleEntry {
                property: property.clone(),
                channel,
            });
        }

        Ok((Self { entries, timing }, finals))
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// Interpolated declarations at `elapsed`, in bucket order.
    pub fn declarations(&self, elapsed: f64) -> StyleDeclarations {
        self.entries
            .iter()
            .map(|entry| {
                let value = match entry.channel {
                    StyleChannel::Color { start, delta } => {
                        let mut channels = [0.0; 3];
                        for (i, channel) in channels.iter_mut().enumerate() {
                            *channel = self.timing.ease(elapsed, f64::from(start[i]), delta[i]);
                        }
                        compile_color(channels)
                    }
                    StyleChannel::Scalar { start, delta, unit } => {
                        format_css_number(self.timing.ease(elapsed, start, delta), unit)
                    }
                };
                (entry.property.clone(), value)
            })
            .collect()
    }

    /// Write the interpolated styles with a single bulk call.
    pub fn apply<A: StyleAdapter>(&self, adapter: &A, element: &mut A::Element, elapsed: f64) {
        adapter.bulk_set(element, &self.declarations(elapsed));
    }
}

/// One step of a tween's tick.
#[derive(Debug, Clone)]
pub enum Process {
    Direct(DirectProcess),
    Style(StyleProcess),
}
