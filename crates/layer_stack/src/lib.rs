//! # Layer Stack
//!
//! The layer-stack subsystem of a small 2D rendering engine: an ordered
//! collection of drawable layers, each with its own parallax scroll and
//! scale, composited against a single camera.
//!
//! ## Features
//!
//! - **Layer List**: ordered stack with O(1) attach and detach by handle
//! - **Parallax**: per-layer scroll speed and zoom against a shared camera
//! - **Dispatch**: tilemap, entity and custom layers drawn through one pass
//! - **Config**: layer defaults and screen size from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use layer_stack::prelude::*;
//!
//! struct Ship {
//!     position: Vec2,
//! }
//!
//! impl Entity for Ship {
//!     fn position(&self) -> Vec2 {
//!         self.position
//!     }
//!
//!     fn draw(&self, screen_position: Vec2, scale: Vec2, draw_list: &mut DrawList) {
//!         draw_list.push(DrawCommand::Sprite { sprite: SpriteId(0), position: screen_position, scale });
//!     }
//! }
//!
//! let ships = vec![Ship { position: Vec2::new(50.0, 0.0) }];
//! let mut layers = LayerList::new();
//! layers.add_entity_layer(&ships);
//! layers.scroll_camera(100.0, 0.0);
//!
//! let mut draw_list = DrawList::new();
//! layers.draw(ScreenSize::new(800, 600), &mut draw_list);
//! assert_eq!(draw_list.len(), 1);
//! ```

pub mod config;
pub mod foundation;
pub mod layers;
pub mod render;

#[cfg(test)]
mod test_support;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, LayerParams, StackConfig},
        foundation::math::{Vec2, WorldRect},
        layers::{
            CameraState, Layer, LayerCursor, LayerData, LayerError, LayerId, LayerList, LayerType,
            ScreenSize, Viewport,
        },
        render::{
            CustomLayer, DrawCommand, DrawList, Entity, EntityList, SpriteId, TileId, Tilemap, Tileset,
        },
    };
}
