//! Draw command accumulator
//!
//! The layer stack never executes drawing itself. Every draw pass appends
//! commands to a [`DrawList`] owned by the renderer, which consumes them in
//! order after the pass. Command order is paint order: earlier commands are
//! drawn underneath later ones.

use crate::foundation::math::Vec2;

/// Identifier of a sprite image known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// Identifier of a tile within a tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// A single screen-space drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a sprite with its origin at `position`
    Sprite {
        /// Sprite image to draw
        sprite: SpriteId,
        /// Screen position in pixels
        position: Vec2,
        /// Scale applied to the sprite image
        scale: Vec2,
    },
    /// Draw one tile covering `size` pixels starting at `position`
    Tile {
        /// Tile to draw
        tile: TileId,
        /// Screen position of the tile's top-left corner in pixels
        position: Vec2,
        /// On-screen tile size in pixels
        size: Vec2,
    },
}

/// Ordered collection of draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create a new empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draw list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Get the number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all commands, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterate over commands in submission order
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_list_keeps_submission_order() {
        let mut list = DrawList::with_capacity(2);
        assert!(list.is_empty());

        list.push(DrawCommand::Tile {
            tile: TileId(3),
            position: Vec2::new(0.0, 0.0),
            size: Vec2::new(16.0, 16.0),
        });
        list.push(DrawCommand::Sprite {
            sprite: SpriteId(1),
            position: Vec2::new(10.0, 20.0),
            scale: Vec2::new(1.0, 1.0),
        });

        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Tile { tile: TileId(3), .. }));
        assert!(matches!(list.commands()[1], DrawCommand::Sprite { sprite: SpriteId(1), .. }));

        list.clear();
        assert!(list.is_empty());
    }
}
