//! Interfaces of the drawable payloads a layer can hold
//!
//! Tilemaps, entity collections and custom callbacks are owned and stored by
//! the application. Layers only borrow them and call into these traits while
//! drawing.

use crate::foundation::math::{Vec2, WorldRect};
use crate::render::draw_list::DrawList;

/// Tile graphics shared by one or more tilemaps
pub trait Tileset {
    /// Width and height of a single tile in pixels
    fn tile_size(&self) -> (u32, u32);
}

/// A grid of tiles drawn by a tilemap layer
pub trait Tilemap {
    /// The tileset this map draws with, if one has been assigned
    fn tileset(&self) -> Option<&dyn Tileset>;

    /// Draw the tiles overlapping `region`
    ///
    /// * `anchor` - screen position in pixels of world origin
    /// * `region` - world-space area to cover, already padded by the caller
    /// * `tile_scale` - layer scale divided by the tileset's tile size
    /// * `draw_list` - destination for the produced commands
    fn draw_region(&self, anchor: Vec2, region: WorldRect, tile_scale: Vec2, draw_list: &mut DrawList);
}

/// A positioned object drawn by an entity layer
pub trait Entity {
    /// World-space position
    fn position(&self) -> Vec2;

    /// Submit draw commands for this entity at a screen position
    fn draw(&self, screen_position: Vec2, scale: Vec2, draw_list: &mut DrawList);
}

/// A collection of entities iterated in draw order
pub trait EntityList {
    /// Entities in the order they should be drawn
    fn entities(&self) -> Box<dyn Iterator<Item = &dyn Entity> + '_>;
}

impl<E: Entity> EntityList for [E] {
    fn entities(&self) -> Box<dyn Iterator<Item = &dyn Entity> + '_> {
        Box::new(self.iter().map(|entity| entity as &dyn Entity))
    }
}

impl<E: Entity> EntityList for Vec<E> {
    fn entities(&self) -> Box<dyn Iterator<Item = &dyn Entity> + '_> {
        self.as_slice().entities()
    }
}

/// A user-supplied draw routine
///
/// Receives the layer's scroll offset and scale; it is responsible for all of
/// its own rendering.
pub trait CustomLayer {
    /// Draw the layer for the current frame
    fn draw(&self, scroll_offset: Vec2, scale: Vec2);
}

impl<F: Fn(Vec2, Vec2)> CustomLayer for F {
    fn draw(&self, scroll_offset: Vec2, scale: Vec2) {
        self(scroll_offset, scale);
    }
}
