//! Value model: parsing, diffing and re-serializing tweenable values.
//!
//! CSS-like strings carry a number and an optional unit (`"12.5px"`), or a
//! color (`"#f80"`, `"#ff8800"`, `"rgb(255, 136, 0)"`). Parsing is
//! forgiving for numbers: anything without a number reads as `0`. Colors are
//! strict: an unknown format is a [`TweenError::ColorParse`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

/// First signed or unsigned decimal number in a string.
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d*\.\d+|-?\d+").expect("number pattern is valid"));

/// Length unit attached to a CSS value.
///
/// `Unit::None` is the resolved "no unit" state (renders as the empty
/// string); an unresolved unit is `Option::None` on [`ParsedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    None,
    In,
    Cm,
    Mm,
    Em,
    Ex,
    Pc,
    Pt,
    Px,
    Percent,
}

impl Unit {
    /// Units in detection order.
    const SCAN_ORDER: [Unit; 9] = [
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Em,
        Unit::Ex,
        Unit::Pc,
        Unit::Pt,
        Unit::Px,
        Unit::Percent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Pc => "pc",
            Unit::Pt => "pt",
            Unit::Px => "px",
            Unit::Percent => "%",
        }
    }

    /// Detect the first unit of the scan order that occurs anywhere in `raw`.
    pub fn detect(raw: &str) -> Option<Unit> {
        Self::SCAN_ORDER
            .into_iter()
            .find(|unit| raw.contains(unit.as_str()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number with an optional unit, as read from a CSS-like string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedValue {
    pub value: f64,
    /// `None` until resolved by [`reconcile_units`].
    pub unit: Option<Unit>,
}

impl ParsedValue {
    pub fn new(value: f64, unit: Option<Unit>) -> Self {
        Self { value, unit }
    }

    /// Render the value with its unit (empty when unresolved).
    pub fn to_css(&self) -> String {
        format_css_number(self.value, self.unit.unwrap_or(Unit::None))
    }
}

/// Extract the first number in `raw`, or `0.0` when there is none.
pub fn parse_number(raw: &str) -> f64 {
    NUMBER
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Split a CSS-like value into its number and unit.
pub fn parse_value(raw: &str) -> ParsedValue {
    ParsedValue {
        value: parse_number(raw),
        unit: Unit::detect(raw),
    }
}

/// Resolve units of a (current, future) pair.
///
/// If neither side has a unit both become [`Unit::None`]; if only one side
/// has one, the other inherits it.
pub fn reconcile_units(current: &mut ParsedValue, future: &mut ParsedValue) {
    match (current.unit, future.unit) {
        (None, None) => {
            current.unit = Some(Unit::None);
            future.unit = Some(Unit::None);
        }
        (None, Some(unit)) => current.unit = Some(unit),
        (Some(unit), None) => future.unit = Some(unit),
        (Some(_), Some(_)) => {}
    }
}

/// Format an interpolated number followed by its unit.
pub fn format_css_number(value: f64, unit: Unit) -> String {
    format!("{}{}", value, unit.as_str())
}

/// RGB color channels.
pub type Rgb = [u8; 3];

/// Per-channel change between two colors; channels may be negative.
pub type RgbDelta = [f64; 3];

/// Channels used when a color value is empty or `transparent`.
pub const WHITE: Rgb = [255, 255, 255];

/// Parse `#RGB`, `#RRGGBB`, `rgb(r,g,b)` or `rgba(r,g,b,a)` into channels.
///
/// Empty strings and `transparent` read as white. Alpha is dropped.
pub fn parse_color(raw: &str) -> Result<Rgb> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "transparent" {
        return Ok(WHITE);
    }
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| TweenError::ColorParse(raw.to_string()));
    }
    if raw.starts_with('r') {
        return parse_rgb_function(raw).ok_or_else(|| TweenError::ColorParse(raw.to_string()));
    }
    Err(TweenError::ColorParse(raw.to_string()))
}

fn parse_hex_color(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (channel, nibble) in rgb.iter_mut().zip(hex.chars()) {
                let n = nibble.to_digit(16)? as u8;
                *channel = n * 17;
            }
            Some(rgb)
        }
        6 => {
            let mut rgb = [0u8; 3];
            for (i, channel) in rgb.iter_mut().enumerate() {
                *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(rgb)
        }
        _ => None,
    }
}

fn parse_rgb_function(raw: &str) -> Option<Rgb> {
    let args = raw
        .strip_prefix("rgba(")
        .or_else(|| raw.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = args.split(',');
    let mut rgb = [0u8; 3];
    for channel in rgb.iter_mut() {
        let part = parts.next()?;
        let n = NUMBER.find(part)?.as_str().parse::<f64>().ok()?;
        *channel = n.trunc().clamp(0.0, 255.0) as u8;
    }
    Some(rgb)
}

/// Channel-wise `future - current`.
pub fn diff_color(future: Rgb, current: Rgb) -> RgbDelta {
    [
        f64::from(future[0]) - f64::from(current[0]),
        f64::from(future[1]) - f64::from(current[1]),
        f64::from(future[2]) - f64::from(current[2]),
    ]
}

/// Clamp, round and render channels as `#rrggbb`.
pub fn compile_color(channels: [f64; 3]) -> String {
    let [r, g, b] = channels.map(|c| c.clamp(0.0, 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}
