//! Ordered layer collection with a shared camera

use crate::config::{LayerParams, StackConfig};
use crate::foundation::collections::LinkedList;
use crate::foundation::math::Vec2;
use crate::render::{CustomLayer, EntityList, Tilemap};

use super::error::LayerError;
use super::layer::{Layer, LayerData, LayerId, LayerKey, LayerType, ListTag};

/// Camera shared by every layer of a list
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    /// World position the screen centre looks at
    pub position: Vec2,
}

/// An ordered stack of layers composited against one camera
///
/// Layers are drawn in list order, so the first layer ends up at the bottom.
/// Payloads are borrowed for `'a`; dropping the list drops its layers but
/// leaves every tilemap, entity collection and callback untouched.
#[derive(Debug)]
pub struct LayerList<'a> {
    pub(super) layers: LinkedList<LayerKey, Layer<'a>>,
    pub(super) camera: CameraState,
    pub(super) tag: ListTag,
    defaults: LayerParams,
}

impl Default for LayerList<'_> {
    fn default() -> Self {
        Self {
            layers: LinkedList::new(),
            camera: CameraState::default(),
            tag: ListTag::fresh(),
            defaults: LayerParams::default(),
        }
    }
}

impl<'a> LayerList<'a> {
    /// Create an empty list with the camera at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list whose new layers start with `defaults`
    pub fn with_defaults(defaults: LayerParams) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Create an empty list from loaded settings
    pub fn from_config(config: &StackConfig) -> Self {
        Self::with_defaults(config.layer_defaults)
    }

    /// Parameters given to newly added layers
    pub const fn defaults(&self) -> LayerParams {
        self.defaults
    }

    // -- Camera --

    /// Move the camera; every layer picks it up on the next draw
    pub fn scroll_camera(&mut self, x: f32, y: f32) {
        self.camera.position = Vec2::new(x, y);
    }

    /// Current camera position
    pub const fn camera_pos(&self) -> Vec2 {
        self.camera.position
    }

    /// Current camera state
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }

    // -- Attach --

    /// Append a tilemap layer on top of the stack
    pub fn add_tilemap_layer(&mut self, tilemap: &'a dyn Tilemap) -> LayerId {
        self.make_layer(LayerData::Tilemap(tilemap))
    }

    /// Append an entity layer on top of the stack
    pub fn add_entity_layer(&mut self, entities: &'a dyn EntityList) -> LayerId {
        self.make_layer(LayerData::Entity(entities))
    }

    /// Append a custom layer on top of the stack
    pub fn add_custom_layer(&mut self, callback: &'a dyn CustomLayer) -> LayerId {
        self.make_layer(LayerData::Custom(callback))
    }

    fn make_layer(&mut self, data: LayerData<'a>) -> LayerId {
        let id = LayerId::new(self.tag, self.layers.push_back(Layer::new(data, self.defaults)));
        log::debug!("Added {:?} layer {:?} at index {}", data.layer_type(), id, self.layers.len() - 1);
        id
    }

    // -- Reorder / detach --

    /// Move a layer to absolute position `index`
    ///
    /// Positions past the end place the layer on top. The other layers keep
    /// their relative order. Returns the layer's new index.
    pub fn move_layer(&mut self, id: LayerId, index: usize) -> Result<usize, LayerError> {
        let key = self.key(id)?;
        let position = self.layers.move_to(key, index).ok_or(LayerError::InvalidLayer(id))?;
        log::debug!("Moved layer {:?} to index {} (requested {})", id, position, index);
        Ok(position)
    }

    /// Index of a layer, 0 being the bottom of the stack
    pub fn index_of_layer(&self, id: LayerId) -> Result<usize, LayerError> {
        self.layers.position(self.key(id)?).ok_or(LayerError::InvalidLayer(id))
    }

    /// Remove a layer from the list
    ///
    /// The layer's payload is not dropped; it remains owned by the caller.
    pub fn destroy_layer(&mut self, id: LayerId) -> Result<(), LayerError> {
        let key = self.key(id)?;
        let layer = self.layers.remove(key).ok_or(LayerError::InvalidLayer(id))?;
        log::debug!("Destroyed {:?} layer {:?}", layer.layer_type(), id);
        Ok(())
    }

    /// Remove every layer, keeping the camera
    pub fn clear(&mut self) {
        let count = self.layers.len();
        self.layers.clear();
        log::debug!("Cleared {} layer(s)", count);
    }

    // -- Introspection --

    /// Number of attached layers
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Check if no layers are attached
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Check whether `id` refers to a layer of this list
    pub fn contains(&self, id: LayerId) -> bool {
        self.key(id).is_ok_and(|key| self.layers.contains(key))
    }

    /// Get a layer by handle
    pub fn layer(&self, id: LayerId) -> Option<&Layer<'a>> {
        self.layers.get(self.key(id).ok()?)
    }

    /// Get a mutable layer by handle
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer<'a>> {
        let key = self.key(id).ok()?;
        self.layers.get_mut(key)
    }

    /// Kind of payload a layer draws
    pub fn layer_type(&self, id: LayerId) -> Option<LayerType> {
        self.layer(id).map(Layer::layer_type)
    }

    /// Borrowed payload of a layer
    pub fn layer_data(&self, id: LayerId) -> Option<LayerData<'a>> {
        self.layer(id).map(Layer::data)
    }

    /// Node key behind a handle issued by this list
    pub(super) fn key(&self, id: LayerId) -> Result<LayerKey, LayerError> {
        id.key_in(self.tag).ok_or(LayerError::InvalidLayer(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Dot, RecordingTilemap};

    fn noop(_: Vec2, _: Vec2) {}

    fn ids_in_order(list: &LayerList<'_>) -> Vec<LayerId> {
        list.iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = LayerList::new();

        assert_eq!(list.num_layers(), 0);
        assert!(list.is_empty());
        assert_eq!(list.camera_pos(), Vec2::zeros());
    }

    #[test]
    fn test_attach_keeps_order_and_indices() {
        let tiles = RecordingTilemap::without_tileset();
        let entities: Vec<Dot> = Vec::new();
        let mut list = LayerList::new();

        let a = list.add_tilemap_layer(&tiles);
        let b = list.add_entity_layer(&entities);
        let c = list.add_custom_layer(&noop);

        assert_eq!(list.num_layers(), 3);
        assert_eq!(ids_in_order(&list), vec![a, b, c]);
        assert_eq!(list.index_of_layer(a), Ok(0));
        assert_eq!(list.index_of_layer(b), Ok(1));
        assert_eq!(list.index_of_layer(c), Ok(2));
        assert_eq!(list.layer_type(a), Some(LayerType::Tilemap));
        assert_eq!(list.layer_type(b), Some(LayerType::Entity));
        assert_eq!(list.layer_type(c), Some(LayerType::Custom));
    }

    #[test]
    fn test_new_layers_use_default_params() {
        let mut list = LayerList::new();
        let id = list.add_custom_layer(&noop);
        let layer = list.layer(id).unwrap();

        assert_eq!(layer.scroll_speed(), Vec2::new(1.0, 1.0));
        assert_eq!(layer.scale(), Vec2::new(1.0, 1.0));
        assert_eq!(layer.scroll_offset(), Vec2::zeros());
    }

    #[test]
    fn test_configured_defaults() {
        let params = LayerParams::new(Vec2::new(0.5, 0.0), Vec2::new(2.0, 2.0));
        let mut list = LayerList::with_defaults(params);
        let id = list.add_custom_layer(&noop);

        assert_eq!(list.layer(id).unwrap().params(), params);
    }

    #[test]
    fn test_scroll_camera_last_write_wins() {
        let mut list = LayerList::new();

        list.scroll_camera(10.0, 20.0);
        list.scroll_camera(-3.0, 4.5);

        assert_eq!(list.camera_pos(), Vec2::new(-3.0, 4.5));
        assert_eq!(list.num_layers(), 0);
    }

    #[test]
    fn test_move_layer_to_absolute_index() {
        let mut list = LayerList::new();
        let ids: Vec<LayerId> = (0..5).map(|_| list.add_custom_layer(&noop)).collect();

        // Moving to index 3 must land at 3, not right after the front
        assert_eq!(list.move_layer(ids[0], 3), Ok(3));
        assert_eq!(list.index_of_layer(ids[0]), Ok(3));
        assert_eq!(ids_in_order(&list), vec![ids[1], ids[2], ids[3], ids[0], ids[4]]);

        assert_eq!(list.move_layer(ids[4], 0), Ok(0));
        assert_eq!(ids_in_order(&list), vec![ids[4], ids[1], ids[2], ids[3], ids[0]]);
    }

    #[test]
    fn test_move_layer_clamps_to_top() {
        let mut list = LayerList::new();
        let ids: Vec<LayerId> = (0..3).map(|_| list.add_custom_layer(&noop)).collect();

        assert_eq!(list.move_layer(ids[1], 42), Ok(2));
        assert_eq!(list.index_of_layer(ids[1]), Ok(2));
        assert_eq!(ids_in_order(&list), vec![ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn test_move_to_every_index() {
        for target in 0..4 {
            let mut list = LayerList::new();
            let ids: Vec<LayerId> = (0..4).map(|_| list.add_custom_layer(&noop)).collect();

            list.move_layer(ids[2], target).unwrap();

            assert_eq!(list.index_of_layer(ids[2]), Ok(target));
            let others: Vec<LayerId> = ids_in_order(&list).into_iter().filter(|id| *id != ids[2]).collect();
            assert_eq!(others, vec![ids[0], ids[1], ids[3]]);
        }
    }

    #[test]
    fn test_destroy_layer() {
        let mut list = LayerList::new();
        let a = list.add_custom_layer(&noop);
        let b = list.add_custom_layer(&noop);
        let c = list.add_custom_layer(&noop);

        assert_eq!(list.destroy_layer(b), Ok(()));

        assert_eq!(list.num_layers(), 2);
        assert_eq!(ids_in_order(&list), vec![a, c]);
        assert_eq!(list.index_of_layer(c), Ok(1));
        assert!(!list.contains(b));
    }

    #[test]
    fn test_stale_handles_are_rejected() {
        let mut list = LayerList::new();
        let a = list.add_custom_layer(&noop);
        list.destroy_layer(a).unwrap();

        // Slot gets reused, the old handle must still fail
        let b = list.add_custom_layer(&noop);
        assert_ne!(a, b);

        assert_eq!(list.destroy_layer(a), Err(LayerError::InvalidLayer(a)));
        assert_eq!(list.move_layer(a, 0), Err(LayerError::InvalidLayer(a)));
        assert_eq!(list.index_of_layer(a), Err(LayerError::InvalidLayer(a)));
        assert!(list.layer(a).is_none());
        assert!(list.layer_type(a).is_none());
        assert!(list.layer_data(a).is_none());
    }

    #[test]
    fn test_handles_from_another_list_are_rejected() {
        let mut first = LayerList::new();
        let mut second = LayerList::new();
        let theirs = first.add_custom_layer(&noop);
        let ours = second.add_custom_layer(&noop);

        // Both lists use the same first slot; the handles must still differ
        assert_ne!(theirs, ours);

        assert!(!second.contains(theirs));
        assert_eq!(second.index_of_layer(theirs), Err(LayerError::InvalidLayer(theirs)));
        assert_eq!(second.move_layer(theirs, 0), Err(LayerError::InvalidLayer(theirs)));
        assert_eq!(second.destroy_layer(theirs), Err(LayerError::InvalidLayer(theirs)));
        assert!(second.layer(theirs).is_none());
        assert!(second.layer_mut(theirs).is_none());
        assert!(second.layer_type(theirs).is_none());
        assert!(second.layer_data(theirs).is_none());

        assert_eq!(second.num_layers(), 1);
        assert_eq!(second.index_of_layer(ours), Ok(0));
        assert_eq!(first.index_of_layer(theirs), Ok(0));
    }

    #[test]
    fn test_clear_keeps_camera() {
        let mut list = LayerList::new();
        list.add_custom_layer(&noop);
        list.add_custom_layer(&noop);
        list.scroll_camera(5.0, 6.0);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.camera_pos(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_layer_data_refers_to_caller_payload() {
        let tiles = RecordingTilemap::without_tileset();
        let mut list = LayerList::new();
        let id = list.add_tilemap_layer(&tiles);

        match list.layer_data(id) {
            Some(LayerData::Tilemap(tilemap)) => {
                let payload = tilemap as *const dyn Tilemap as *const ();
                assert!(std::ptr::eq(payload, (&tiles as *const RecordingTilemap).cast::<()>()));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }
}
