use thiserror::Error;

use crate::category::Category;

/// Why a part could not be appended to a [`SelectorBuilder`](crate::SelectorBuilder).
///
/// The builder is left untouched when either error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A part was appended after a part that must follow it.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {attempted} after {last})"
    )]
    OrderViolation {
        /// Category of the rejected part.
        attempted: Category,
        /// Category of the part appended last.
        last: Category,
    },

    /// A type, id or pseudo-element part was appended twice.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (repeated {category})"
    )]
    DuplicateSingleton {
        /// The repeated category.
        category: Category,
    },
}
