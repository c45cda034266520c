//! Per-layer draw dispatch
//!
//! Each pass recomputes a layer's scroll offset from the camera, builds the
//! layer's [`Viewport`] and hands the visible area to the payload:
//!
//! - **Tilemap**: skipped when no tileset is assigned; otherwise asked to draw
//!   the visible rectangle padded by one unit on every side.
//! - **Entity**: every entity is mapped to screen space and drawn at unit scale.
//! - **Custom**: the callback receives offset and scale and draws by itself.

use crate::foundation::math::Vec2;
use crate::render::{DrawList, EntityList, Tilemap};

use super::error::LayerError;
use super::layer::{Layer, LayerData, LayerId};
use super::list::LayerList;
use super::viewport::{ScreenSize, Viewport};

/// World units added around the visible rectangle before drawing tiles
const TILE_PADDING: f32 = 1.0;

impl LayerList<'_> {
    /// Draw every layer bottom to top
    pub fn draw(&mut self, screen: ScreenSize, draw_list: &mut DrawList) {
        let camera = self.camera.position;
        let tag = self.tag;
        self.layers
            .for_each_mut(|key, layer| draw_layer(LayerId::new(tag, key), layer, camera, screen, draw_list));
    }

    /// Draw one layer against the list's camera
    pub fn draw_single_layer(
        &mut self,
        id: LayerId,
        screen: ScreenSize,
        draw_list: &mut DrawList,
    ) -> Result<(), LayerError> {
        let camera = self.camera.position;
        let key = self.key(id)?;
        let layer = self.layers.get_mut(key).ok_or(LayerError::InvalidLayer(id))?;
        draw_layer(id, layer, camera, screen, draw_list);
        Ok(())
    }
}

fn draw_layer(id: LayerId, layer: &mut Layer<'_>, camera: Vec2, screen: ScreenSize, draw_list: &mut DrawList) {
    layer.scroll_offset = camera.component_mul(&layer.scroll_speed);
    let viewport = Viewport::new(screen, layer.scroll_offset, layer.scale);

    log::trace!(
        "Drawing {:?} layer {:?}: offset ({}, {}), scale ({}, {})",
        layer.layer_type(),
        id,
        viewport.offset.x,
        viewport.offset.y,
        viewport.scale.x,
        viewport.scale.y
    );

    match layer.data {
        LayerData::Tilemap(tilemap) => draw_tilemap(id, tilemap, &viewport, draw_list),
        LayerData::Entity(entities) => draw_entities(entities, &viewport, draw_list),
        LayerData::Custom(callback) => callback.draw(viewport.offset, viewport.scale),
    }
}

#[allow(clippy::cast_precision_loss)]
fn draw_tilemap(id: LayerId, tilemap: &dyn Tilemap, viewport: &Viewport, draw_list: &mut DrawList) {
    let Some(tileset) = tilemap.tileset() else {
        log::debug!("Skipping tilemap layer {:?}: no tileset assigned", id);
        return;
    };

    let (tile_width, tile_height) = tileset.tile_size();
    if tile_width == 0 || tile_height == 0 {
        log::warn!("Skipping tilemap layer {:?}: tileset has zero-sized tiles", id);
        return;
    }

    let tile_scale = Vec2::new(
        viewport.scale.x / tile_width as f32,
        viewport.scale.y / tile_height as f32,
    );
    let region = viewport.visible_rect().padded(TILE_PADDING);
    tilemap.draw_region(viewport.screen_anchor(), region, tile_scale, draw_list);
}

fn draw_entities(entities: &dyn EntityList, viewport: &Viewport, draw_list: &mut DrawList) {
    let unit = Vec2::new(1.0, 1.0);
    for entity in entities.entities() {
        entity.draw(viewport.world_to_screen(entity.position()), unit, draw_list);
    }
}
