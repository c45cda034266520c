//! Rendering interfaces
//!
//! - **Draw List**: the per-frame command accumulator handed to every draw pass
//! - **Collaborators**: traits for the tilemaps, entities and custom routines
//!   that layers draw

pub mod collab;
pub mod draw_list;

pub use collab::{CustomLayer, Entity, EntityList, Tilemap, Tileset};
pub use draw_list::{DrawCommand, DrawList, SpriteId, TileId};
