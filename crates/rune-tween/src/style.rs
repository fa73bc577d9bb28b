//! Style adapter seam and the tweenable style-name allow-list.
//!
//! The engine never touches a host's styling system directly. It reads and
//! writes CSS-like strings through a [`StyleAdapter`], which is configured
//! once on the [`Tweener`](crate::registry::Tweener).

use std::collections::HashMap;

use crate::target::{PropertyMap, PropertyTarget, PropertyValue};
use crate::types::TweenId;

/// Ordered `(property, value)` pairs written in one bulk call.
pub type StyleDeclarations = Vec<(String, String)>;

/// Host capability that reads and writes style values on an element.
///
/// Only names listed in [`STYLE_NAMES`] reach the adapter, matched exactly:
/// `"width"` is a style but `"min-width-hint"` is not, even though it
/// contains one. Any other name on an element is animated as a plain
/// property.
pub trait StyleAdapter {
    /// The element type styles are applied to.
    type Element: PropertyTarget + 'static;

    /// Current (computed) value of a style property.
    fn get(&self, element: &Self::Element, property: &str) -> String;

    /// Write a single style property.
    fn set(&self, element: &mut Self::Element, property: &str, value: &str);

    /// Write several style properties at once.
    fn bulk_set(&self, element: &mut Self::Element, declarations: &[(String, String)]);
}

/// Style names that are tweened through the style adapter.
pub const STYLE_NAMES: &[&str] = &[
    "background-color",
    "background-image",
    "border-bottom-color",
    "border-bottom-width",
    "border-left-color",
    "border-left-width",
    "border-right-color",
    "border-right-width",
    "border-spacing",
    "border-top-color",
    "border-top-width",
    "bottom",
    "color",
    "content",
    "fill",
    "fill-opacity",
    "font-size",
    "font-weight",
    "height",
    "left",
    "letter-spacing",
    "lighting-color",
    "line-height",
    "list-style-image",
    "list-style-position",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "marker-offset",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "opacity",
    "outline-color",
    "outline-offset",
    "outline-width",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "right",
    "stop-color",
    "stop-opacity",
    "stroke-dashoffset",
    "stroke-opacity",
    "stroke-width",
    "text-indent",
    "top",
    "width",
    "word-spacing",
    "z-index",
    "-moz-border-bottom-colors",
    "-moz-border-left-colors",
    "-moz-border-radius-bottomleft",
    "-moz-border-radius-bottomright",
    "-moz-border-radius-topleft",
    "-moz-border-radius-topright",
    "-moz-border-right-colors",
    "-moz-border-top-colors",
    "-moz-box-sizing",
    "-moz-column-count",
    "-moz-column-gap",
    "-moz-column-width",
    "-moz-float-edge",
    "-moz-force-broken-image-icon",
    "-moz-image-region",
    "-moz-outline-radius-bottomleft",
    "-moz-outline-radius-bottomright",
    "-moz-outline-radius-topleft",
    "-moz-outline-radius-topright",
];

/// Whether `name` is a style property routed through the adapter. Exact
/// match against [`STYLE_NAMES`].
pub fn is_style_tweenable(name: &str) -> bool {
    STYLE_NAMES.contains(&name)
}

/// Style properties whose name mentions `color` are interpolated per channel.
pub fn is_color_property(name: &str) -> bool {
    name.contains("color")
}

/// A host-agnostic element: an inline style map plus plain properties.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    style: HashMap<String, String>,
    properties: PropertyMap,
    bulk_writes: usize,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style inline style.
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.style.insert(property.to_string(), value.to_string());
        self
    }

    /// Builder-style plain property.
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Number of bulk style writes applied so far.
    pub fn bulk_writes(&self) -> usize {
        self.bulk_writes
    }
}

impl PropertyTarget for MemoryElement {
    fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.property(name)
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.set_property(name, value);
    }

    fn tween_tag(&self) -> Option<TweenId> {
        self.properties.tween_tag()
    }

    fn set_tween_tag(&mut self, tag: Option<TweenId>) {
        self.properties.set_tween_tag(tag);
    }
}

/// Adapter over [`MemoryElement`]'s inline style map.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleAdapter;

impl StyleAdapter for InlineStyleAdapter {
    type Element = MemoryElement;

    fn get(&self, element: &MemoryElement, property: &str) -> String {
        element.style(property).unwrap_or_default().to_string()
    }

    fn set(&self, element: &mut MemoryElement, property: &str, value: &str) {
        element.style.insert(property.to_string(), value.to_string());
    }

    fn bulk_set(&self, element: &mut MemoryElement, declarations: &[(String, String)]) {
        for (property, value) in declarations {
            element.style.insert(property.clone(), value.clone());
        }
        element.bulk_writes += 1;
    }
}
