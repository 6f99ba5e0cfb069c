//! Stateless entry points that start a fresh [`SelectorBuilder`].
//!
//! ```
//! use objkit_selector::css;
//!
//! # fn main() -> Result<(), objkit_selector::SelectorError> {
//! let selector = css::element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?
//!     .render();
//! assert_eq!(selector, r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```
//!
//! The first part of a fresh builder never fails. The functions still return
//! `Result` so every link of a chain uses `?` alike.

use crate::builder::SelectorBuilder;
use crate::error::SelectorError;

/// Start a selector with a type part, e.g. `div`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_type`].
pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an id part, e.g. `#main`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_id`].
pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class part, e.g. `.container`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_class`].
pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute part, e.g. `[href]`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_attribute`].
pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class, e.g. `:hover`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_pseudo_class`].
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
///
/// # Errors
///
/// Never fails on a fresh builder; see [`SelectorBuilder::append_pseudo_element`].
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Join two selectors with a combinator: `left + " " + combinator + " " + right`.
///
/// Either side may itself be the result of an earlier `combine`.
#[must_use]
pub fn combine(
    mut left: SelectorBuilder,
    combinator: impl AsRef<str>,
    mut right: SelectorBuilder,
) -> SelectorBuilder {
    left.combine(combinator, &mut right)
}
