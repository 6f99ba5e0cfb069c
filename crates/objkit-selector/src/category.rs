//! Selector part categories.
//!
//! A compound selector reads `element#id.class[attr]:pseudo-class::pseudo-element`.
//! The builder enforces that order with the rank table below.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The category of one appended selector part.
///
/// Variants are declared in their required order, so the derived `Ord`
/// agrees with [`Category::rank`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Nothing has been appended yet.
    #[default]
    None,

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Rendered verbatim: `div`
    Type,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Rendered as `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Rendered as `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:focus`
    PseudoClass,

    /// [§ 4 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-element-selectors)
    ///
    /// Rendered as `::before`
    PseudoElement,
}

/// Rank of each category, indexed by declaration order.
const RANKS: [(Category, u8); 7] = [
    (Category::None, 0),
    (Category::Type, 1),
    (Category::Id, 2),
    (Category::Class, 3),
    (Category::Attribute, 4),
    (Category::PseudoClass, 5),
    (Category::PseudoElement, 6),
];

impl Category {
    /// Position of this category in the fixed part order.
    ///
    /// `None < Type < Id < Class < Attribute < PseudoClass < PseudoElement`
    #[must_use]
    pub const fn rank(self) -> u8 {
        RANKS[self as usize].1
    }

    /// Whether the category may occur at most once in a compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Type | Self::Id | Self::PseudoElement)
    }

    /// Text placed before the value when the part is rendered.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::None | Self::Type => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text placed after the value when the part is rendered.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn rank_table_matches_declaration_order() {
        for (index, category) in Category::iter().enumerate() {
            assert_eq!(RANKS[index].0, category);
            assert_eq!(usize::from(category.rank()), index);
        }
    }

    #[test]
    fn rank_agrees_with_ord() {
        let all: Vec<Category> = Category::iter().collect();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn singletons() {
        let singletons: Vec<Category> = Category::iter().filter(|c| c.is_singleton()).collect();
        assert_eq!(
            singletons,
            vec![Category::Type, Category::Id, Category::PseudoElement]
        );
    }

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Type.to_string(), "type");
        let name: &'static str = Category::PseudoElement.into();
        assert_eq!(name, "pseudo-element");
    }
}
