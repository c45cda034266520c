//! Math utilities and types
//!
//! Provides the 2D math types shared by layers, viewports and draw commands.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle in world space
///
/// `top_left` holds the minimum corner and `bottom_right` the maximum corner,
/// following screen conventions where Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRect {
    /// Minimum corner of the rectangle
    pub top_left: Vec2,
    /// Maximum corner of the rectangle
    pub bottom_right: Vec2,
}

impl WorldRect {
    /// Create a new rectangle from its corners
    pub fn new(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self { top_left, bottom_right }
    }

    /// Grow the rectangle by `amount` on every side
    #[must_use]
    pub fn padded(&self, amount: f32) -> Self {
        let pad = Vec2::new(amount, amount);
        Self {
            top_left: self.top_left - pad,
            bottom_right: self.bottom_right + pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_padding() {
        let rect = WorldRect::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)).padded(1.0);

        assert_eq!(rect.top_left, Vec2::new(-1.0, -1.0));
        assert_eq!(rect.bottom_right, Vec2::new(5.0, 5.0));
    }
}
