// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the quadtree: the bounded-object capability, proxies, and node views.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use canopy_aabb::Aabb;

/// Capability required of anything stored in a [`QuadTree`](crate::QuadTree).
///
/// The tree calls [`aabb`](Bounded::aabb) when an object is added, when it is pushed
/// down during subdivision, when it is tested by a query, and when it is removed. The
/// returned box must therefore stay the same for as long as the object is indexed:
/// remove it, change it, then add it again.
pub trait Bounded {
    /// Current bounds of the object.
    fn aabb(&self) -> Aabb;
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn aabb(&self) -> Aabb {
        (**self).aabb()
    }
}

/// A key into caller-owned storage paired with the bounds it was indexed with.
///
/// Equality, ordering and hashing look at `key` only, so two proxies for the same key
/// are the same object as far as the tree is concerned. Keep keys unique within a tree.
///
/// Proxies let the tree hold a cheap handle instead of the entity itself; the caller's
/// entity table stays the owner. To move an entity, remove its old proxy and add a new
/// one (see [`QuadTree::relocate`](crate::QuadTree::relocate)).
#[derive(Copy, Clone, Debug)]
pub struct Proxy<K> {
    /// Caller-side identifier.
    pub key: K,
    /// Bounds used for placement and queries.
    pub aabb: Aabb,
}

impl<K> Proxy<K> {
    /// Pair `key` with `aabb`.
    pub const fn new(key: K, aabb: Aabb) -> Self {
        Self { key, aabb }
    }
}

impl<K> Bounded for Proxy<K> {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

impl<K: PartialEq> PartialEq for Proxy<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Proxy<K> {}

impl<K: PartialOrd> PartialOrd for Proxy<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord> Ord for Proxy<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Hash> Hash for Proxy<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Identifier of a node slot in the tree's arena.
///
/// Only meaningful for the tree that produced it, and only until the next mutation:
/// pruned slots are reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node slots are intentionally 32-bit; arenas never approach u32::MAX nodes."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Read-only view of one node, produced by [`QuadTree::nodes`](crate::QuadTree::nodes).
#[derive(Debug)]
pub struct NodeView<'a, O> {
    /// Arena slot of the node.
    pub id: NodeId,
    /// Region covered by the node.
    pub region: Aabb,
    /// Distance from the root (the root has depth 0).
    pub depth: usize,
    /// Objects stored directly at this node.
    pub objects: &'a [O],
    /// Child nodes in NW, NE, SE, SW order, or `None` for a leaf.
    pub children: Option<[NodeId; 4]>,
}

impl<O> NodeView<'_, O> {
    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
