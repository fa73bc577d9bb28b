//! Error types for the tweening engine.

use thiserror::Error;

/// Result type for tweening operations.
pub type Result<T> = std::result::Result<T, TweenError>;

/// Errors that can occur while configuring the tweener or building a tween.
///
/// Runtime ticks never fail; everything here surfaces synchronously to the
/// caller that configured the tweener or created the tween.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// No usable style adapter, or the tweener is not in the ready state.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A color string in a format the value model does not understand.
    #[error("unknown color value: {0:?}")]
    ColorParse(String),

    /// A tween parameter with the wrong shape (e.g. a non-easing `transition`).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
