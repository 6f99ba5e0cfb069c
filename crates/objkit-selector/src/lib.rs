//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   built part by part: type, id, class, attribute, pseudo-class and
//!   pseudo-element, in that order
//!   - Type, id and pseudo-element may appear at most once
//!   - Class, attribute and pseudo-class may repeat
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   by joining two built selectors with a combinator
//!
//! - **Facade** ([`css`]) of stateless factory functions
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Specificity
//! - Escaping of part values (values are embedded verbatim)
//!
//! # Example
//!
//! ```
//! use objkit_selector::css;
//!
//! # fn main() -> Result<(), objkit_selector::SelectorError> {
//! let selector = css::combine(
//!     css::element("div")?.id("main")?,
//!     "+",
//!     css::element("table")?.id("data")?,
//! )
//! .render();
//! assert_eq!(selector, "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// The selector builder itself.
pub mod builder;
/// Categories of selector parts and their fixed order.
pub mod category;
/// The four CSS combinators.
pub mod combinator;
/// Stateless facade for starting a builder.
pub mod css;
/// Errors raised while appending parts.
pub mod error;

// Re-exports for convenience
pub use builder::{Part, SelectorBuilder};
pub use category::Category;
pub use combinator::Combinator;
pub use error::SelectorError;
