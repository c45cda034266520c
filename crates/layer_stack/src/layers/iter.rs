//! Traversal over a layer list

use std::iter::FusedIterator;

use crate::foundation::collections::Iter;

use super::layer::{Layer, LayerId, LayerKey, ListTag};
use super::list::LayerList;

/// Iterator over `(handle, layer)` pairs, bottom to top
#[derive(Debug)]
pub struct Layers<'l, 'a> {
    tag: ListTag,
    inner: Iter<'l, LayerKey, Layer<'a>>,
}

impl<'l, 'a> Iterator for Layers<'l, 'a> {
    type Item = (LayerId, &'l Layer<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, layer) = self.inner.next()?;
        Some((LayerId::new(self.tag, key), layer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Layers<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (key, layer) = self.inner.next_back()?;
        Some((LayerId::new(self.tag, key), layer))
    }
}

impl ExactSizeIterator for Layers<'_, '_> {}

impl FusedIterator for Layers<'_, '_> {}

/// A position on a layer in a [`LayerList`]
///
/// Stepping off either end yields `None`; there is no position before the
/// first layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerCursor<'l, 'a> {
    list: &'l LayerList<'a>,
    key: LayerKey,
    layer: &'l Layer<'a>,
}

impl<'l, 'a> LayerCursor<'l, 'a> {
    fn at(list: &'l LayerList<'a>, key: LayerKey) -> Option<Self> {
        let layer = list.layers.get(key)?;
        Some(Self { list, key, layer })
    }

    /// Cursor on the layer above this one
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Option<Self> {
        Self::at(self.list, self.list.layers.next(self.key)?)
    }

    /// Cursor on the layer below this one
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::at(self.list, self.list.layers.prev(self.key)?)
    }

    /// The layer under the cursor
    pub const fn get(&self) -> &'l Layer<'a> {
        self.layer
    }

    /// Handle of the layer under the cursor
    pub const fn id(&self) -> LayerId {
        LayerId::new(self.list.tag, self.key)
    }
}

impl<'a> LayerList<'a> {
    /// Cursor on the bottom layer, or `None` for an empty list
    pub fn cursor(&self) -> Option<LayerCursor<'_, 'a>> {
        LayerCursor::at(self, self.layers.front()?)
    }

    /// Cursor on the top layer, or `None` for an empty list
    pub fn cursor_back(&self) -> Option<LayerCursor<'_, 'a>> {
        LayerCursor::at(self, self.layers.back()?)
    }

    /// Cursor on a given layer
    pub fn cursor_at(&self, id: LayerId) -> Option<LayerCursor<'_, 'a>> {
        LayerCursor::at(self, self.key(id).ok()?)
    }

    /// Iterate over layers bottom to top; reverse for top to bottom
    pub fn iter(&self) -> Layers<'_, 'a> {
        Layers {
            tag: self.tag,
            inner: self.layers.iter(),
        }
    }
}

impl<'l, 'a> IntoIterator for &'l LayerList<'a> {
    type Item = (LayerId, &'l Layer<'a>);
    type IntoIter = Layers<'l, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
