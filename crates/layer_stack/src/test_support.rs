//! Payload doubles shared by unit tests

use std::cell::RefCell;

use crate::foundation::math::{Vec2, WorldRect};
use crate::render::{DrawCommand, DrawList, Entity, SpriteId, TileId, Tilemap, Tileset};

/// Entity drawn as a single sprite
#[derive(Debug, Clone)]
pub(crate) struct Dot {
    pub sprite: SpriteId,
    pub position: Vec2,
}

impl Dot {
    pub fn new(sprite: u32, x: f32, y: f32) -> Self {
        Self {
            sprite: SpriteId(sprite),
            position: Vec2::new(x, y),
        }
    }
}

impl Entity for Dot {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn draw(&self, screen_position: Vec2, scale: Vec2, draw_list: &mut DrawList) {
        draw_list.push(DrawCommand::Sprite {
            sprite: self.sprite,
            position: screen_position,
            scale,
        });
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedTileset {
    pub width: u32,
    pub height: u32,
}

impl Tileset for FixedTileset {
    fn tile_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Arguments of one `draw_region` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RegionCall {
    pub anchor: Vec2,
    pub region: WorldRect,
    pub tile_scale: Vec2,
}

/// Tilemap that records every draw request and emits one tile command for it
#[derive(Debug, Default)]
pub(crate) struct RecordingTilemap {
    pub tileset: Option<FixedTileset>,
    pub calls: RefCell<Vec<RegionCall>>,
}

impl RecordingTilemap {
    pub fn with_tile_size(width: u32, height: u32) -> Self {
        Self {
            tileset: Some(FixedTileset { width, height }),
            calls: RefCell::default(),
        }
    }

    pub fn without_tileset() -> Self {
        Self::default()
    }
}

impl Tilemap for RecordingTilemap {
    fn tileset(&self) -> Option<&dyn Tileset> {
        self.tileset.as_ref().map(|tileset| tileset as &dyn Tileset)
    }

    fn draw_region(&self, anchor: Vec2, region: WorldRect, tile_scale: Vec2, draw_list: &mut DrawList) {
        self.calls.borrow_mut().push(RegionCall { anchor, region, tile_scale });
        draw_list.push(DrawCommand::Tile {
            tile: TileId(0),
            position: anchor,
            size: tile_scale,
        });
    }
}
