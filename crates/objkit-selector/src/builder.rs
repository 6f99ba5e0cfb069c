//! The selector builder.
//!
//! A [`SelectorBuilder`] accumulates selector text part by part. Before each
//! part is appended, its [`Category`] is checked against the category of the
//! previous part:
//!
//! ```text
//! element#id.class[attr]:pseudoClass::pseudoElement
//!           \----/\----/\----------/
//!           may occur several times
//! ```
//!
//! Two built selectors can be joined with a combinator via
//! [`SelectorBuilder::combine`].

use std::fmt;
use std::mem;

#[cfg(feature = "selector-trace")]
use objkit_common::warning::warn_once;

use crate::category::Category;
#[cfg(feature = "selector-trace")]
use crate::combinator::Combinator;
use crate::error::SelectorError;

/// A single selector part waiting to be appended.
///
/// Useful when the parts of a selector come from data rather than from a
/// fixed chain of calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    category: Category,
    value: String,
}

impl Part {
    fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }

    /// A type selector part, e.g. `div`.
    #[must_use]
    pub fn element(value: impl Into<String>) -> Self {
        Self::new(Category::Type, value)
    }

    /// An id selector part, e.g. `#main`.
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self::new(Category::Id, value)
    }

    /// A class selector part, e.g. `.container`.
    #[must_use]
    pub fn class(value: impl Into<String>) -> Self {
        Self::new(Category::Class, value)
    }

    /// An attribute selector part, e.g. `[href]`.
    #[must_use]
    pub fn attr(value: impl Into<String>) -> Self {
        Self::new(Category::Attribute, value)
    }

    /// A pseudo-class part, e.g. `:hover`.
    #[must_use]
    pub fn pseudo_class(value: impl Into<String>) -> Self {
        Self::new(Category::PseudoClass, value)
    }

    /// A pseudo-element part, e.g. `::after`.
    #[must_use]
    pub fn pseudo_element(value: impl Into<String>) -> Self {
        Self::new(Category::PseudoElement, value)
    }

    /// The category this part will be checked as.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The raw value, without prefix or suffix.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.category.prefix(),
            self.value,
            self.category.suffix()
        )
    }
}

/// Builds a CSS selector string one part at a time.
///
/// The `append_*` methods mutate in place and return `&mut Self`; the
/// same-named owned methods ([`element`](Self::element), [`id`](Self::id),
/// ...) consume and return the builder so that facade chains read naturally:
///
/// ```
/// use objkit_selector::css;
///
/// # fn main() -> Result<(), objkit_selector::SelectorError> {
/// let selector = css::id("main")?.class("container")?.class("editable")?.render();
/// assert_eq!(selector, "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectorBuilder {
    /// Selector text built so far.
    text: String,
    /// Category of the most recently appended part.
    last: Category,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: Category::None,
        }
    }

    /// Build a selector from a sequence of parts, stopping at the first
    /// part that is out of order or repeated.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rejected part.
    pub fn from_parts<I>(parts: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = Part>,
    {
        let mut builder = Self::new();
        for part in parts {
            builder.append(part.category, &part.value)?;
        }
        Ok(builder)
    }

    /// Reject `attempted` if it may not follow the last appended part.
    fn check(&self, attempted: Category) -> Result<(), SelectorError> {
        let rank = attempted.rank();
        let last_rank = self.last.rank();

        if rank < last_rank {
            return Err(SelectorError::OrderViolation {
                attempted,
                last: self.last,
            });
        }
        if rank == last_rank && attempted.is_singleton() {
            return Err(SelectorError::DuplicateSingleton {
                category: attempted,
            });
        }
        Ok(())
    }

    /// Validate, then append. Nothing is written when validation fails.
    fn append(&mut self, category: Category, value: &str) -> Result<(), SelectorError> {
        self.check(category)?;

        self.text.push_str(category.prefix());
        self.text.push_str(value);
        self.text.push_str(category.suffix());
        self.last = category;

        #[cfg(feature = "selector-trace")]
        {
            eprintln!("[SELECTOR] append {category} {value:?} -> {:?}", self.text);
        }

        Ok(())
    }

    /// Append a type selector (`value` verbatim).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if a type was just appended,
    /// [`SelectorError::OrderViolation`] if any later category was.
    pub fn append_type(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Type, value)?;
        Ok(self)
    }

    /// Append an id selector (`#value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if an id was just appended,
    /// [`SelectorError::OrderViolation`] if any later category was.
    pub fn append_id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Id, value)?;
        Ok(self)
    }

    /// Append a class selector (`.value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute, pseudo-class or
    /// pseudo-element was already appended.
    pub fn append_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Class, value)?;
        Ok(self)
    }

    /// Append an attribute selector (`[value]`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element
    /// was already appended.
    pub fn append_attribute(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Attribute, value)?;
        Ok(self)
    }

    /// Append a pseudo-class (`:value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element was already
    /// appended.
    pub fn append_pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoClass, value)?;
        Ok(self)
    }

    /// Append a pseudo-element (`::value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingleton`] if a pseudo-element was just
    /// appended.
    pub fn append_pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoElement, value)?;
        Ok(self)
    }

    /// Append a prepared [`Part`].
    ///
    /// # Errors
    ///
    /// Same rules as the matching `append_*` method.
    pub fn push(&mut self, part: &Part) -> Result<&mut Self, SelectorError> {
        self.append(part.category, &part.value)?;
        Ok(self)
    }

    /// Owned form of [`append_type`](Self::append_type).
    ///
    /// # Errors
    ///
    /// See [`append_type`](Self::append_type). The builder is dropped.
    pub fn element(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Type, value)?;
        Ok(self)
    }

    /// Owned form of [`append_id`](Self::append_id).
    ///
    /// # Errors
    ///
    /// See [`append_id`](Self::append_id). The builder is dropped.
    pub fn id(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Id, value)?;
        Ok(self)
    }

    /// Owned form of [`append_class`](Self::append_class).
    ///
    /// # Errors
    ///
    /// See [`append_class`](Self::append_class). The builder is dropped.
    pub fn class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Class, value)?;
        Ok(self)
    }

    /// Owned form of [`append_attribute`](Self::append_attribute).
    ///
    /// # Errors
    ///
    /// See [`append_attribute`](Self::append_attribute). The builder is dropped.
    pub fn attr(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::Attribute, value)?;
        Ok(self)
    }

    /// Owned form of [`append_pseudo_class`](Self::append_pseudo_class).
    ///
    /// # Errors
    ///
    /// See [`append_pseudo_class`](Self::append_pseudo_class). The builder is dropped.
    pub fn pseudo_class(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoClass, value)?;
        Ok(self)
    }

    /// Owned form of [`append_pseudo_element`](Self::append_pseudo_element).
    ///
    /// # Errors
    ///
    /// See [`append_pseudo_element`](Self::append_pseudo_element). The builder is dropped.
    pub fn pseudo_element(mut self, value: &str) -> Result<Self, SelectorError> {
        self.append(Category::PseudoElement, value)?;
        Ok(self)
    }

    /// Take the built selector text and reset the builder to its empty state.
    ///
    /// Calling `render` twice in a row yields the text, then `""`.
    pub fn render(&mut self) -> String {
        self.last = Category::None;
        let text = mem::take(&mut self.text);

        #[cfg(feature = "selector-trace")]
        {
            eprintln!("[SELECTOR] render {text:?}");
        }

        text
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Join this selector and `other` with `combinator` into a new builder:
    /// `self + " " + combinator + " " + other`.
    ///
    /// Both operands are rendered, and therefore reset. The combinator is
    /// written verbatim and never validated. With the `selector-trace`
    /// feature, anything other than the four CSS combinators is also
    /// reported once through the warning sink.
    ///
    /// The result starts from [`Category::None`], so further appends go
    /// through the usual ordering checks.
    #[must_use]
    pub fn combine(&mut self, combinator: impl AsRef<str>, other: &mut Self) -> Self {
        let symbol = combinator.as_ref();

        #[cfg(feature = "selector-trace")]
        {
            if Combinator::from_symbol(symbol).is_none() {
                warn_once(
                    "Selector",
                    &format!("unusual combinator {symbol:?} rendered verbatim"),
                );
            }
        }

        let left = self.render();
        let right = other.render();
        Self {
            text: format!("{left} {symbol} {right}"),
            last: Category::None,
        }
    }

    /// Selector text built so far, without resetting.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Category of the most recently appended part.
    #[must_use]
    pub const fn last_category(&self) -> Category {
        self.last
    }

    /// Whether nothing has been appended since creation or the last render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
