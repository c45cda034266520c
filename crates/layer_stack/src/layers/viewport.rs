//! World-to-screen mapping for a single layer
//!
//! The camera looks at the centre of the screen. For a layer with offset `o`
//! and scale `s`, world point `p` lands on screen at `(p - o) * s + centre`,
//! and the visible world area is the screen rectangle shrunk by `s` around `o`.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Vec2, WorldRect};

/// Size of the render target in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ScreenSize {
    /// Create a screen size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width and height as a vector
    #[allow(clippy::cast_precision_loss)]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Centre of the screen in pixels
    pub fn center(&self) -> Vec2 {
        self.as_vec2() / 2.0
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Screen transform of one layer for one draw pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Render target size
    pub screen: ScreenSize,
    /// Layer scroll offset in world units
    pub offset: Vec2,
    /// Layer zoom per axis
    pub scale: Vec2,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(screen: ScreenSize, offset: Vec2, scale: Vec2) -> Self {
        Self { screen, offset, scale }
    }

    /// Visible world-space rectangle
    pub fn visible_rect(&self) -> WorldRect {
        let half = self.screen.center().component_div(&self.scale);
        WorldRect::new(-half + self.offset, half + self.offset)
    }

    /// Map a world position to screen pixels
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.offset).component_mul(&self.scale) + self.screen.center()
    }

    /// Screen position of the world origin
    pub fn screen_anchor(&self) -> Vec2 {
        self.world_to_screen(Vec2::zeros())
    }
}
