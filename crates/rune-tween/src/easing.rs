//! Easing equations for tween timing.
//!
//! Every equation has the classic tweening signature
//! `(t, b, c, d) -> value`:
//! - `t` elapsed time, in `[0, d]`
//! - `b` start value
//! - `c` change (delta) between the start and the destination
//! - `d` duration
//!
//! At `t = 0` the result is `b` and at `t = d` it is `b + c`. The expo
//! family is the exception: `easeInExpo` stops `c * 0.001` short of the
//! destination, which is why a finished tween snaps to its exact final value.
//!
//! Families: quad, cubic, quart, quint, sine, expo, circ, elastic, back and
//! bounce, each with `In`, `Out`, `InOut` and `OutIn` variants, plus
//! `linear` (alias `easeNone`).
//!
//! # Usage
//!
//! ```
//! use rune_tween::easing::Easing;
//!
//! let ease: Easing = "easeOutCubic".parse().unwrap();
//! let x = ease.evaluate(500.0, 0.0, 100.0, 1000.0);
//! assert!(x > 50.0);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Default overshoot for the back family.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Optional shape parameters for the elastic and back families.
///
/// A value of `None` (or `Some(0.0)` for amplitude/period) selects the
/// family's default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EasingParams {
    /// Elastic amplitude. Ignored when smaller than `|c|`.
    pub amplitude: Option<f64>,
    /// Elastic period, defaults to `d * 0.3` (`d * 0.45` for `InOut`).
    pub period: Option<f64>,
    /// Back overshoot, defaults to [`DEFAULT_OVERSHOOT`].
    pub overshoot: Option<f64>,
}

macro_rules! easings {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A named easing equation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum Easing {
            $($variant,)*
        }

        impl Easing {
            /// Every named easing, in registry order.
            pub const ALL: &'static [Easing] = &[$(Easing::$variant,)*];

            /// Canonical camel-case name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Easing::$variant => $name,)*
                }
            }
        }
    };
}

easings! {
    Linear => "linear",
    InQuad => "easeInQuad",
    OutQuad => "easeOutQuad",
    InOutQuad => "easeInOutQuad",
    OutInQuad => "easeOutInQuad",
    InCubic => "easeInCubic",
    OutCubic => "easeOutCubic",
    InOutCubic => "easeInOutCubic",
    OutInCubic => "easeOutInCubic",
    InQuart => "easeInQuart",
    OutQuart => "easeOutQuart",
    InOutQuart => "easeInOutQuart",
    OutInQuart => "easeOutInQuart",
    InQuint => "easeInQuint",
    OutQuint => "easeOutQuint",
    InOutQuint => "easeInOutQuint",
    OutInQuint => "easeOutInQuint",
    InSine => "easeInSine",
    OutSine => "easeOutSine",
    InOutSine => "easeInOutSine",
    OutInSine => "easeOutInSine",
    InExpo => "easeInExpo",
    OutExpo => "easeOutExpo",
    InOutExpo => "easeInOutExpo",
    OutInExpo => "easeOutInExpo",
    InCirc => "easeInCirc",
    OutCirc => "easeOutCirc",
    InOutCirc => "easeInOutCirc",
    OutInCirc => "easeOutInCirc",
    InElastic => "easeInElastic",
    OutElastic => "easeOutElastic",
    InOutElastic => "easeInOutElastic",
    OutInElastic => "easeOutInElastic",
    InBack => "easeInBack",
    OutBack => "easeOutBack",
    InOutBack => "easeInOutBack",
    OutInBack => "easeOutInBack",
    InBounce => "easeInBounce",
    OutBounce => "easeOutBounce",
    InOutBounce => "easeInOutBounce",
    OutInBounce => "easeOutInBounce",
}

impl Default for Easing {
    fn default() -> Self {
        Self::OutCubic
    }
}

impl Easing {
    /// Look up an easing by name, ignoring ASCII case.
    ///
    /// `easeNone` is accepted as an alias of `linear`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("easeNone") {
            return Some(Self::Linear);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Evaluate with the default shape parameters.
    pub fn evaluate(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        self.evaluate_with(t, b, c, d, EasingParams::default())
    }

    /// Evaluate with explicit elastic/back parameters.
    pub fn evaluate_with(&self, t: f64, b: f64, c: f64, d: f64, params: EasingParams) -> f64 {
        use Easing::*;

        match self {
            Linear => linear(t, b, c, d),

            InQuad => in_quad(t, b, c, d),
            OutQuad => out_quad(t, b, c, d),
            InOutQuad => in_out_quad(t, b, c, d),
            OutInQuad => out_in(t, b, c, d, out_quad, in_quad),

            InCubic => in_cubic(t, b, c, d),
            OutCubic => out_cubic(t, b, c, d),
            InOutCubic => in_out_cubic(t, b, c, d),
            OutInCubic => out_in(t, b, c, d, out_cubic, in_cubic),

            InQuart => in_quart(t, b, c, d),
            OutQuart => out_quart(t, b, c, d),
            InOutQuart => in_out_quart(t, b, c, d),
            OutInQuart => out_in(t, b, c, d, out_quart, in_quart),

            InQuint => in_quint(t, b, c, d),
            OutQuint => out_quint(t, b, c, d),
            InOutQuint => in_out_quint(t, b, c, d),
            OutInQuint => out_in(t, b, c, d, out_quint, in_quint),

            InSine => in_sine(t, b, c, d),
            OutSine => out_sine(t, b, c, d),
            InOutSine => in_out_sine(t, b, c, d),
            OutInSine => out_in(t, b, c, d, out_sine, in_sine),

            InExpo => in_expo(t, b, c, d),
            OutExpo => out_expo(t, b, c, d),
            InOutExpo => in_out_expo(t, b, c, d),
            OutInExpo => out_in(t, b, c, d, out_expo, in_expo),

            InCirc => in_circ(t, b, c, d),
            OutCirc => out_circ(t, b, c, d),
            InOutCirc => in_out_circ(t, b, c, d),
            OutInCirc => out_in(t, b, c, d, out_circ, in_circ),

            InElastic => in_elastic(t, b, c, d, params),
            OutElastic => out_elastic(t, b, c, d, params),
            InOutElastic => in_out_elastic(t, b, c, d, params),
            OutInElastic => out_in(
                t,
                b,
                c,
                d,
                |t, b, c, d| out_elastic(t, b, c, d, params),
                |t, b, c, d| in_elastic(t, b, c, d, params),
            ),

            InBack => in_back(t, b, c, d, overshoot(params)),
            OutBack => out_back(t, b, c, d, overshoot(params)),
            InOutBack => in_out_back(t, b, c, d, overshoot(params)),
            OutInBack => out_in(
                t,
                b,
                c,
                d,
                |t, b, c, d| out_back(t, b, c, d, overshoot(params)),
                |t, b, c, d| in_back(t, b, c, d, overshoot(params)),
            ),

            InBounce => in_bounce(t, b, c, d),
            OutBounce => out_bounce(t, b, c, d),
            InOutBounce => in_out_bounce(t, b, c, d),
            OutInBounce => out_in(t, b, c, d, out_bounce, in_bounce),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| TweenError::InvalidParameter(format!("unknown transition: {s:?}")))
    }
}

impl TryFrom<String> for Easing {
    type Error = TweenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(e: Easing) -> Self {
        e.name().to_string()
    }
}

/// Signature of a caller-supplied easing: `(t, b, c, d) -> value`.
pub type EasingFn = dyn Fn(f64, f64, f64, f64) -> f64;

/// The easing selected for a tween: a named equation or a callable.
#[derive(Clone)]
pub enum Transition {
    Named(Easing),
    Custom(Rc<EasingFn>),
}

impl Transition {
    /// Wrap a callable easing.
    pub fn custom(f: impl Fn(f64, f64, f64, f64) -> f64 + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    #[inline]
    pub fn apply(&self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        match self {
            Self::Named(easing) => easing.evaluate(t, b, c, d),
            Self::Custom(f) => f(t, b, c, d),
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::Named(Easing::default())
    }
}

impl From<Easing> for Transition {
    fn from(e: Easing) -> Self {
        Self::Named(e)
    }
}

impl FromStr for Transition {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::Named)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(e) => f.debug_tuple("Named").field(e).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[inline]
fn overshoot(params: EasingParams) -> f64 {
    params.overshoot.unwrap_or(DEFAULT_OVERSHOOT)
}

/// First half runs the `Out` curve, second half the `In` curve, each over
/// half of the change.
#[inline]
fn out_in(
    t: f64,
    b: f64,
    c: f64,
    d: f64,
    out: impl Fn(f64, f64, f64, f64) -> f64,
    inn: impl Fn(f64, f64, f64, f64) -> f64,
) -> f64 {
    if t < d / 2.0 {
        out(t * 2.0, b, c / 2.0, d)
    } else {
        inn(t * 2.0 - d, b + c / 2.0, c / 2.0, d)
    }
}

fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

fn in_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

fn out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

fn in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

fn in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

fn out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

fn in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

fn in_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t + b
}

fn out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

fn in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

fn in_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t * t + b
}

fn out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

fn in_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

fn in_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * (PI / 2.0)).cos() + c + b
}

fn out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

fn in_out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

fn in_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    c * 2f64.powf(10.0 * (t / d - 1.0)) + b - c * 0.001
}

fn out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        return b + c;
    }
    c * 1.001 * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
}

fn in_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b - c * 0.0005;
    }
    let t = t - 1.0;
    c / 2.0 * 1.0005 * (-(2f64.powf(-10.0 * t)) + 2.0) + b
}

fn in_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

fn out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

fn in_out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

/// Resolve amplitude and phase shift for the elastic family.
///
/// Amplitude falls back to `c` (with a quarter-period phase) when unset or
/// smaller than `|c|`; otherwise the phase comes from `asin(c / a)`.
fn elastic_shape(c: f64, p: f64, amplitude: Option<f64>) -> (f64, f64) {
    match amplitude {
        Some(a) if a != 0.0 && a >= c.abs() => (a, p / (2.0 * PI) * (c / a).asin()),
        _ => (c, p / 4.0),
    }
}

fn elastic_period(params: EasingParams, default: f64) -> f64 {
    match params.period {
        Some(p) if p != 0.0 => p,
        _ => default,
    }
}

fn in_elastic(t: f64, b: f64, c: f64, d: f64, params: EasingParams) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = elastic_period(params, d * 0.3);
    let (a, s) = elastic_shape(c, p, params.amplitude);
    let t = t - 1.0;
    -(a * 2f64.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

fn out_elastic(t: f64, b: f64, c: f64, d: f64, params: EasingParams) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = elastic_period(params, d * 0.3);
    let (a, s) = elastic_shape(c, p, params.amplitude);
    a * 2f64.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

fn in_out_elastic(t: f64, b: f64, c: f64, d: f64, params: EasingParams) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = elastic_period(params, d * (0.3 * 1.5));
    let (a, s) = elastic_shape(c, p, params.amplitude);
    let t = t - 1.0;
    let wave = ((t * d - s) * (2.0 * PI) / p).sin();
    if t < 0.0 {
        -0.5 * (a * 2f64.powf(10.0 * t) * wave) + b
    } else {
        a * 2f64.powf(-10.0 * t) * wave * 0.5 + c + b
    }
}

fn in_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

fn out_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

fn in_out_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let s = s * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

fn out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

fn in_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - out_bounce(d - t, 0.0, c, d) + b
}

fn in_out_bounce(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_boundaries() {
        let (b, c, d) = (10.0, 90.0, 1000.0);
        for ease in Easing::ALL {
            if matches!(ease, Easing::InExpo | Easing::OutInExpo) {
                continue;
            }
            let start = ease.evaluate(0.0, b, c, d);
            let end = ease.evaluate(d, b, c, d);
            assert!(approx_eq(start, b), "{ease} at t=0 gave {start}");
            assert!(approx_eq(end, b + c), "{ease} at t=d gave {end}");
        }
    }

    #[test]
    fn test_expo_special_cases() {
        let (b, c, d) = (0.0, 100.0, 1000.0);

        // Exact at t=0, stops 0.1% short at t=d.
        assert_eq!(Easing::InExpo.evaluate(0.0, b, c, d), b);
        assert!(approx_eq(Easing::InExpo.evaluate(d, b, c, d), b + c - c * 0.001));

        assert_eq!(Easing::OutExpo.evaluate(d, b, c, d), b + c);
        assert!(approx_eq(Easing::OutExpo.evaluate(0.0, b, c, d), b));

        assert_eq!(Easing::InOutExpo.evaluate(0.0, b, c, d), b);
        assert_eq!(Easing::InOutExpo.evaluate(d, b, c, d), b + c);

        assert!(approx_eq(Easing::OutInExpo.evaluate(0.0, b, c, d), b));
    }

    #[test]
    fn test_elastic_special_cases() {
        let (b, c, d) = (5.0, -20.0, 400.0);
        for ease in [Easing::InElastic, Easing::OutElastic, Easing::InOutElastic] {
            assert_eq!(ease.evaluate(0.0, b, c, d), b);
            assert_eq!(ease.evaluate(d, b, c, d), b + c);
        }
    }

    #[test]
    fn test_linear() {
        let ease = Easing::Linear;
        assert!(approx_eq(ease.evaluate(0.0, 0.0, 100.0, 1000.0), 0.0));
        assert!(approx_eq(ease.evaluate(250.0, 0.0, 100.0, 1000.0), 25.0));
        assert!(approx_eq(ease.evaluate(500.0, 0.0, 100.0, 1000.0), 50.0));
        assert!(approx_eq(ease.evaluate(750.0, 0.0, 100.0, 1000.0), 75.0));
    }

    #[test]
    fn test_in_out_symmetry() {
        for ease in [
            Easing::InOutQuad,
            Easing::InOutCubic,
            Easing::InOutQuart,
            Easing::InOutQuint,
            Easing::InOutSine,
            Easing::InOutCirc,
        ] {
            let mid = ease.evaluate(500.0, 0.0, 1.0, 1000.0);
            assert!(approx_eq(mid, 0.5), "{ease} midpoint was {mid}");

            let early = ease.evaluate(250.0, 0.0, 1.0, 1000.0);
            let late = ease.evaluate(750.0, 0.0, 1.0, 1000.0);
            assert!(approx_eq(early + late, 1.0), "{ease} is not symmetric");
        }
    }

    #[test]
    fn test_out_in_midpoint() {
        // OutIn composites reach half of the change at half time.
        for ease in [Easing::OutInQuad, Easing::OutInCubic, Easing::OutInSine, Easing::OutInBounce] {
            let mid = ease.evaluate(500.0, 0.0, 100.0, 1000.0);
            assert!(approx_eq(mid, 50.0), "{ease} midpoint was {mid}");
        }
    }

    #[test]
    fn test_in_is_slow_out_is_fast() {
        let early_in = Easing::InCubic.evaluate(250.0, 0.0, 1.0, 1000.0);
        let early_out = Easing::OutCubic.evaluate(250.0, 0.0, 1.0, 1000.0);
        assert!(early_in < 0.25);
        assert!(early_out > 0.25);
    }

    #[test]
    fn test_back_overshoot() {
        // In-back dips below the start before heading to the destination.
        let dip = Easing::InBack.evaluate(200.0, 0.0, 100.0, 1000.0);
        assert!(dip < 0.0);

        let none = EasingParams {
            overshoot: Some(0.0),
            ..Default::default()
        };
        let cubic = Easing::InCubic.evaluate(200.0, 0.0, 100.0, 1000.0);
        let flat = Easing::InBack.evaluate_with(200.0, 0.0, 100.0, 1000.0, none);
        assert!(approx_eq(cubic, flat));
    }

    #[test]
    fn test_elastic_amplitude() {
        // An amplitude larger than |c| changes the curve; a smaller one is ignored.
        let big = EasingParams {
            amplitude: Some(200.0),
            ..Default::default()
        };
        let small = EasingParams {
            amplitude: Some(1.0),
            ..Default::default()
        };
        let default = Easing::OutElastic.evaluate(300.0, 0.0, 100.0, 1000.0);
        let with_small = Easing::OutElastic.evaluate_with(300.0, 0.0, 100.0, 1000.0, small);
        let with_big = Easing::OutElastic.evaluate_with(300.0, 0.0, 100.0, 1000.0, big);
        assert!(approx_eq(default, with_small));
        assert!(!approx_eq(default, with_big));
    }

    #[test]
    fn test_bounce_stays_in_range() {
        for i in 0..=100 {
            let t = i as f64 * 10.0;
            let v = Easing::OutBounce.evaluate(t, 0.0, 1.0, 1000.0);
            assert!((-EPSILON..=1.0 + EPSILON).contains(&v), "out of range at {t}: {v}");
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(Easing::from_name("easeOutCubic"), Some(Easing::OutCubic));
        assert_eq!(Easing::from_name("easeoutcubic"), Some(Easing::OutCubic));
        assert_eq!(Easing::from_name("EASEINOUTBOUNCE"), Some(Easing::InOutBounce));
        assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("easeNone"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("wobble"), None);

        for ease in Easing::ALL {
            assert_eq!(Easing::from_name(ease.name()), Some(*ease));
        }
    }

    #[test]
    fn test_parse_error() {
        let err = "wobble".parse::<Easing>().unwrap_err();
        assert!(matches!(err, TweenError::InvalidParameter(_)));
    }

    #[test]
    fn test_default() {
        assert_eq!(Easing::default(), Easing::OutCubic);
        assert!(matches!(Transition::default(), Transition::Named(Easing::OutCubic)));
    }

    #[test]
    fn test_custom_transition() {
        let step = Transition::custom(|t, b, c, d| if t < d { b } else { b + c });
        assert_eq!(step.apply(999.0, 1.0, 2.0, 1000.0), 1.0);
        assert_eq!(step.apply(1000.0, 1.0, 2.0, 1000.0), 3.0);
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&Easing::InOutBack).unwrap();
        assert_eq!(json, "\"easeInOutBack\"");
        let parsed: Easing = serde_json::from_str("\"easeinoutback\"").unwrap();
        assert_eq!(parsed, Easing::InOutBack);
        assert!(serde_json::from_str::<Easing>("\"nope\"").is_err());
    }
}
