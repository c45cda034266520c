//! Parallax layer stack
//!
//! A [`LayerList`] is an ordered stack of layers sharing one camera. Each
//! layer borrows a payload (a tilemap, an entity collection or a custom draw
//! callback) and carries its own parallax parameters:
//!
//! - **scroll speed** multiplies the camera position to get the layer's
//!   offset: `1` tracks the camera, `0` is a fixed background, values above
//!   `1` move faster than the camera (foreground).
//! - **scale** zooms the layer around the screen centre.
//!
//! [`LayerList::draw`] walks the stack bottom to top and appends each
//! layer's commands to a [`DrawList`](crate::render::DrawList), so list order
//! is paint order. Layers are addressed by [`LayerId`] handles that stay
//! valid across moves and are rejected once the layer is destroyed or when
//! passed to a different list.

mod draw;
mod error;
mod iter;
mod layer;
mod list;
mod viewport;

pub use error::LayerError;
pub use iter::{LayerCursor, Layers};
pub use layer::{Layer, LayerData, LayerId, LayerType};
pub use list::{CameraState, LayerList};
pub use viewport::{ScreenSize, Viewport};
