//! Specialized collection types
//!
//! [`LinkedList`] is a doubly-linked list whose nodes live in a [`SlotMap`].
//! Node handles are generation-checked slot map keys, so a handle kept by a
//! caller works as a back-reference to its node: unlinking, moving and
//! position queries need no search, and a handle to a removed node is simply
//! rejected instead of dangling.

pub use slotmap::{DefaultKey, Key, SlotMap};

use std::iter::FusedIterator;

/// A node of a [`LinkedList`]
#[derive(Debug, Clone)]
struct Node<K, T> {
    value: T,
    prev: Option<K>,
    next: Option<K>,
}

/// Ordered doubly-linked list backed by a slot map arena
///
/// Keeps insertion order; `move_to` is the only way to reorder nodes.
///
/// | operation                  | cost          |
/// |----------------------------|---------------|
/// | `push_back`                | O(1)          |
/// | `remove` (by handle)       | O(1)          |
/// | `remove_value` (by value)  | O(n)          |
/// | `position`, `move_to`      | O(position)   |
#[derive(Debug, Clone)]
pub struct LinkedList<K: Key, T> {
    nodes: SlotMap<K, Node<K, T>>,
    head: Option<K>,
    tail: Option<K>,
}

impl<K: Key, T> LinkedList<K, T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    /// Number of nodes in the list
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether `key` refers to a node of this list
    pub fn contains(&self, key: K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Append a value after the current tail and return its node handle
    pub fn push_back(&mut self, value: T) -> K {
        let prev = self.tail;
        let key = self.nodes.insert(Node { value, prev, next: None });
        match prev {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        key
    }

    /// Unlink a node by handle and return its value
    pub fn remove(&mut self, key: K) -> Option<T> {
        if !self.nodes.contains_key(key) {
            return None;
        }
        self.unlink(key);
        self.nodes.remove(key).map(|node| node.value)
    }

    /// Unlink the first node whose value equals `value`
    pub fn remove_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let key = self.iter().find(|(_, v)| *v == value).map(|(k, _)| k)?;
        self.remove(key)
    }

    /// Unlink every node front-to-back, handing each value to `free`
    pub fn clear_with<F: FnMut(T)>(&mut self, mut free: F) {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let Some(node) = self.nodes.remove(key) else { break };
            cursor = node.next;
            free(node.value);
        }
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Remove every node, dropping the values
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Get the value stored at `key`
    pub fn get(&self, key: K) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Get a mutable reference to the value stored at `key`
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Handle of the first node
    pub fn front(&self) -> Option<K> {
        self.head
    }

    /// Handle of the last node
    pub fn back(&self) -> Option<K> {
        self.tail
    }

    /// Handle of the node after `key`
    pub fn next(&self, key: K) -> Option<K> {
        self.nodes.get(key)?.next
    }

    /// Handle of the node before `key`
    pub fn prev(&self, key: K) -> Option<K> {
        self.nodes.get(key)?.prev
    }

    /// 0-based position of `key`, counted by walking back to the front
    pub fn position(&self, key: K) -> Option<usize> {
        let mut node = self.nodes.get(key)?;
        let mut hops = 0;
        while let Some(prev) = node.prev {
            hops += 1;
            node = &self.nodes[prev];
        }
        Some(hops)
    }

    /// Move a node to absolute position `index`
    ///
    /// `index` counts positions among the other nodes; anything past the end
    /// places the node at the tail. Returns the node's new position.
    pub fn move_to(&mut self, key: K, index: usize) -> Option<usize> {
        if !self.nodes.contains_key(key) {
            return None;
        }
        self.unlink(key);

        let mut before = None;
        let mut cursor = self.head;
        let mut position = 0;
        while let Some(current) = cursor {
            if position == index {
                break;
            }
            before = Some(current);
            cursor = self.nodes[current].next;
            position += 1;
        }

        self.link_after(before, key);
        Some(position)
    }

    /// Iterate over `(handle, value)` pairs front-to-back
    pub fn iter(&self) -> Iter<'_, K, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Iterate mutably over values in list order
    pub fn for_each_mut<F: FnMut(K, &mut T)>(&mut self, mut f: F) {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = &mut self.nodes[key];
            cursor = node.next;
            f(key, &mut node.value);
        }
    }

    /// Detach a node from its neighbours, leaving it in the arena
    fn unlink(&mut self, key: K) {
        let (prev, next) = {
            let node = &self.nodes[key];
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        let node = &mut self.nodes[key];
        node.prev = None;
        node.next = None;
    }

    /// Link a detached node after `prev`, or at the front when `prev` is `None`
    fn link_after(&mut self, prev: Option<K>, key: K) {
        let next = match prev {
            Some(prev) => self.nodes[prev].next,
            None => self.head,
        };
        {
            let node = &mut self.nodes[key];
            node.prev = prev;
            node.next = next;
        }
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
    }
}

impl<K: Key, T> Default for LinkedList<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-ended iterator over a [`LinkedList`]
#[derive(Debug)]
pub struct Iter<'a, K: Key, T> {
    list: &'a LinkedList<K, T>,
    front: Option<K>,
    back: Option<K>,
    remaining: usize,
}

impl<'a, K: Key, T> Iterator for Iter<'a, K, T> {
    type Item = (K, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.front?;
        let node = &self.list.nodes[key];
        self.front = node.next;
        self.remaining -= 1;
        Some((key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Key, T> DoubleEndedIterator for Iter<'_, K, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.back?;
        let node = &self.list.nodes[key];
        self.back = node.prev;
        self.remaining -= 1;
        Some((key, &node.value))
    }
}

impl<K: Key, T> ExactSizeIterator for Iter<'_, K, T> {}

impl<K: Key, T> FusedIterator for Iter<'_, K, T> {}

impl<'a, K: Key, T> IntoIterator for &'a LinkedList<K, T> {
    type Item = (K, &'a T);
    type IntoIter = Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
