use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Dimensions default to `f64`. Integer dimensions serialize without a
/// decimal point, so `Rectangle::new(10, 20)` becomes
/// `{"width":10,"height":20}` while `Rectangle::new(10.0, 20.0)` keeps the
/// `.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle<T = f64> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rectangle<T> {
    /// Create a rectangle with the given width and height.
    #[must_use]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Mul<Output = T> + Copy> Rectangle<T> {
    /// `width * height`
    #[must_use]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}
