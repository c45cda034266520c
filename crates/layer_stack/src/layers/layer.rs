//! A single renderable layer

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::LayerParams;
use crate::foundation::math::Vec2;
use crate::render::{CustomLayer, EntityList, Tilemap};

slotmap::new_key_type! {
    /// Key of a layer's node inside its list
    pub(super) struct LayerKey;
}

static NEXT_LIST_TAG: AtomicU64 = AtomicU64::new(1);

/// Identity of the list that issued a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct ListTag(u64);

impl ListTag {
    pub(super) fn fresh() -> Self {
        Self(NEXT_LIST_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a layer in a [`LayerList`](super::LayerList)
///
/// The handle is the key of the list node holding the layer, tagged with the
/// list that issued it. It stays valid while the layer is moved and is
/// rejected once the layer is destroyed or when passed to another list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    list: ListTag,
    key: LayerKey,
}

impl LayerId {
    pub(super) const fn new(list: ListTag, key: LayerKey) -> Self {
        Self { list, key }
    }

    /// Node key, if the handle was issued by `list`
    pub(super) fn key_in(self, list: ListTag) -> Option<LayerKey> {
        (self.list == list).then_some(self.key)
    }
}

/// Kind of payload a layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// A grid of tiles
    Tilemap,
    /// A collection of positioned entities
    Entity,
    /// A user-supplied draw routine
    Custom,
}

/// Borrowed payload of a layer
///
/// Layers never own what they draw; the application keeps the tilemap,
/// entity collection or callback alive for at least as long as the list.
#[derive(Clone, Copy)]
pub enum LayerData<'a> {
    /// Tilemap drawn through its tileset
    Tilemap(&'a dyn Tilemap),
    /// Entities drawn one by one
    Entity(&'a dyn EntityList),
    /// Callback invoked with the layer's offset and scale
    Custom(&'a dyn CustomLayer),
}

impl LayerData<'_> {
    /// The type tag of this payload
    pub const fn layer_type(&self) -> LayerType {
        match self {
            Self::Tilemap(_) => LayerType::Tilemap,
            Self::Entity(_) => LayerType::Entity,
            Self::Custom(_) => LayerType::Custom,
        }
    }
}

impl fmt::Debug for LayerData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerData::{:?}", self.layer_type())
    }
}

/// One renderable unit of a layer list
///
/// `scroll_offset` is derived state: every draw pass recomputes it as the
/// list's camera position multiplied by `scroll_speed`.
#[derive(Debug, Clone)]
pub struct Layer<'a> {
    pub(super) scroll_offset: Vec2,
    pub(super) scroll_speed: Vec2,
    pub(super) scale: Vec2,
    pub(super) data: LayerData<'a>,
}

impl<'a> Layer<'a> {
    pub(super) fn new(data: LayerData<'a>, params: LayerParams) -> Self {
        Self {
            scroll_offset: Vec2::zeros(),
            scroll_speed: params.scroll_speed,
            scale: params.scale,
            data,
        }
    }

    /// Kind of payload this layer draws
    pub const fn layer_type(&self) -> LayerType {
        self.data.layer_type()
    }

    /// The borrowed payload
    pub const fn data(&self) -> LayerData<'a> {
        self.data
    }

    /// Offset computed by the most recent draw pass
    pub const fn scroll_offset(&self) -> Vec2 {
        self.scroll_offset
    }

    /// Parallax multiplier per axis
    pub const fn scroll_speed(&self) -> Vec2 {
        self.scroll_speed
    }

    /// Zoom per axis
    pub const fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Current scroll speed and scale
    pub const fn params(&self) -> LayerParams {
        LayerParams {
            scroll_speed: self.scroll_speed,
            scale: self.scale,
        }
    }

    /// Set the parallax multiplier; takes effect on the next draw
    pub fn set_scroll_speed(&mut self, x: f32, y: f32) {
        self.scroll_speed = Vec2::new(x, y);
    }

    /// Set the zoom; takes effect on the next draw
    pub fn set_scale(&mut self, w: f32, h: f32) {
        self.scale = Vec2::new(w, h);
    }

    /// Replace scroll speed and scale at once
    pub fn apply_params(&mut self, params: LayerParams) {
        self.scroll_speed = params.scroll_speed;
        self.scale = params.scale;
    }
}
