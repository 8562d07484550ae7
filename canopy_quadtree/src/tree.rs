// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: arena, insertion with growth, removal with pruning, queries.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use canopy_aabb::{Aabb, Quadrant};

use crate::error::QuadTreeError;
use crate::types::{Bounded, NodeId, NodeView};

#[derive(Clone, Debug)]
struct Node<O> {
    region: Aabb,
    objects: Vec<O>,
    children: Option<[NodeId; 4]>,
}

impl<O> Node<O> {
    fn leaf(region: Aabb) -> Self {
        Self {
            region,
            objects: Vec::new(),
            children: None,
        }
    }
}

/// A quadtree over objects with axis-aligned bounds that grows to fit what it is given.
///
/// Each node covers a region and stores the objects that its region contains but no single
/// child region contains. A leaf holds up to `capacity` objects before it splits into four
/// quadrants. Objects outside the root region make the root double toward them, with the
/// old root kept intact as one quadrant of the new one.
///
/// `O` is normally a small handle such as a [`Proxy`](crate::Proxy); the tree never owns
/// the entities behind it. Queries return [`BTreeSet`]s, hence `O: Ord`.
#[derive(Clone)]
pub struct QuadTree<O> {
    nodes: Vec<Option<Node<O>>>, // slots
    free_list: Vec<usize>,
    root: NodeId,
    capacity: usize,
    len: usize,
}

impl<O> fmt::Debug for QuadTree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = total - self.free_list.len();
        f.debug_struct("QuadTree")
            .field("region", &self.region())
            .field("capacity", &self.capacity)
            .field("len", &self.len)
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .finish_non_exhaustive()
    }
}

impl<O> QuadTree<O> {
    /// Create an empty tree covering `region`, with up to `capacity` objects per leaf.
    ///
    /// # Panics
    ///
    /// Panics if [`QuadTree::try_new`] would return an error.
    pub fn new(region: Aabb, capacity: usize) -> Self {
        match Self::try_new(region, capacity) {
            Ok(tree) => tree,
            Err(e) => panic!("invalid quadtree configuration: {e}"),
        }
    }

    /// Create an empty tree, checking the configuration.
    ///
    /// The region must be well formed with finite, positive width and height, and
    /// `capacity` must be at least 1. Depth bounds may be infinite.
    pub fn try_new(region: Aabb, capacity: usize) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        region.validate()?;
        let (width, height) = (region.width(), region.height());
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(QuadTreeError::DegenerateRegion { width, height });
        }
        Ok(Self {
            nodes: vec![Some(Node::leaf(region))],
            free_list: Vec::new(),
            root: NodeId::new(0),
            capacity,
            len: 0,
        })
    }

    /// Region currently covered by the root. It only grows; [`QuadTree::clear`] keeps it.
    pub fn region(&self) -> Aabb {
        self.node(self.root).region
    }

    /// Objects a leaf holds before subdividing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of indexed objects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no objects are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Depth of the deepest node; a lone root has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes().map(|n| n.depth).max().unwrap_or(0)
    }

    /// All live nodes in depth-first order, root first, children in NW, NE, SE, SW order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_, O>> + '_ {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            out.push(NodeView {
                id,
                region: node.region,
                depth,
                objects: &node.objects,
                children: node.children,
            });
            if let Some(children) = node.children {
                stack.extend(children.iter().rev().map(|&c| (c, depth + 1)));
            }
        }
        out.into_iter()
    }

    /// Drop every object and every node below the root. The root region is kept.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "quadtree::clear"))]
    pub fn clear(&mut self) {
        let region = self.region();
        self.nodes.clear();
        self.free_list.clear();
        self.nodes.push(Some(Node::leaf(region)));
        self.root = NodeId::new(0);
        self.len = 0;
    }

    fn node(&self, id: NodeId) -> &Node<O> {
        match self.nodes.get(id.idx()) {
            Some(Some(node)) => node,
            _ => unreachable!("quadtree references freed node {id:?}"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<O> {
        match self.nodes.get_mut(id.idx()) {
            Some(Some(node)) => node,
            _ => unreachable!("quadtree references freed node {id:?}"),
        }
    }

    fn alloc(&mut self, node: Node<O>) -> NodeId {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            NodeId::new(idx)
        } else {
            self.nodes.push(Some(node));
            NodeId::new(self.nodes.len() - 1)
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes[id.idx()].take() {
            self.free_list.push(id.idx());
            if let Some(children) = node.children {
                for child in children {
                    self.free_subtree(child);
                }
            }
        }
    }

    fn is_subtree_empty(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.objects.is_empty()
            && node
                .children
                .is_none_or(|children| children.iter().all(|&c| self.is_subtree_empty(c)))
    }

    /// Collapse the children of `id` if none of them holds anything.
    fn prune(&mut self, id: NodeId) {
        let Some(children) = self.node(id).children else {
            return;
        };
        if children.iter().all(|&c| self.is_subtree_empty(c)) {
            self.node_mut(id).children = None;
            for child in children {
                self.free_subtree(child);
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(node = ?id, region = ?self.node(id).region, "pruned empty quadrants");
        }
    }
}

impl<O: Bounded + Ord + Clone> QuadTree<O> {
    /// Index `object`, growing the root until its region contains the object's bounds.
    ///
    /// Growth doubles the root toward the object's center (see [`Quadrant::from_offset`];
    /// an offset of exactly zero counts as negative). The old root, with everything
    /// below it, becomes the quadrant of the new root opposite that direction, so
    /// nothing already indexed moves.
    ///
    /// # Panics
    ///
    /// Panics if the tree cannot grow to fit the object: its center is NaN, its depth
    /// bounds are outside the root's, or the root would overflow to an infinite extent.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "quadtree::add"))]
    pub fn add(&mut self, object: O) {
        let aabb = object.aabb();
        debug_assert!(aabb.is_valid(), "malformed bounds added to quadtree: {aabb:?}");
        let mut object = object;
        loop {
            match self.insert_at(self.root, object, &aabb) {
                Ok(()) => {
                    self.len += 1;
                    return;
                }
                Err(rejected) => {
                    object = rejected;
                    self.grow_toward(&aabb);
                }
            }
        }
    }

    /// Remove `object`, found by equality within the nodes its current bounds lead to.
    ///
    /// Returns whether it was found. The object's bounds must be the ones it was added
    /// with; an object that moved while indexed may not be found.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "quadtree::remove"))]
    pub fn remove(&mut self, object: &O) -> bool {
        let aabb = object.aabb();
        let removed = self.remove_at(self.root, object, &aabb);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Remove `old` and add `new`, the remove/update/re-add cycle in one call.
    ///
    /// `new` is indexed whether or not `old` was found; the return value reports the
    /// latter.
    pub fn relocate(&mut self, old: &O, new: O) -> bool {
        let found = self.remove(old);
        self.add(new);
        found
    }

    /// Objects whose bounds strictly intersect `region`. See [`QuadTree::query_range_into`].
    pub fn query_range(&self, region: &Aabb) -> BTreeSet<O> {
        let mut out = BTreeSet::new();
        self.query_range_into(region, &mut out);
        out
    }

    /// Add to `out` every object whose bounds strictly intersect `region`.
    ///
    /// Nodes whose region lies entirely inside `region` contribute all of their objects
    /// without a per-object test. For objects with positive extent that is the same as
    /// testing them; a zero-size object on the boundary of such a query is returned even
    /// though [`Aabb::intersects`] would reject it.
    pub fn query_range_into(&self, region: &Aabb, out: &mut BTreeSet<O>) {
        self.query_at(self.root, region, out);
    }

    /// Objects whose bounds contain the point `(x, y)`, boundary included.
    pub fn query_point(&self, x: f64, y: f64) -> BTreeSet<O> {
        let mut out = BTreeSet::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !node.region.contains_point(x, y) {
                continue;
            }
            out.extend(
                node.objects
                    .iter()
                    .filter(|o| o.aabb().contains_point(x, y))
                    .cloned(),
            );
            if let Some(children) = node.children {
                stack.extend(children);
            }
        }
        out
    }

    /// Every indexed object: a range query over the root region.
    pub fn get_all(&self) -> BTreeSet<O> {
        self.query_range(&self.region())
    }

    fn insert_at(&mut self, id: NodeId, object: O, aabb: &Aabb) -> Result<(), O> {
        let node = self.node(id);
        if !node.region.contains(aabb) {
            return Err(object);
        }
        let (children, has_room) = (node.children, node.objects.len() < self.capacity);
        match children {
            Some(children) => {
                let mut object = object;
                for child in children {
                    match self.insert_at(child, object, aabb) {
                        Ok(()) => return Ok(()),
                        Err(rejected) => object = rejected,
                    }
                }
                self.node_mut(id).objects.push(object);
            }
            None if has_room => self.node_mut(id).objects.push(object),
            None => self.subdivide(id, object),
        }
        Ok(())
    }

    /// Split a full leaf and push its objects, plus `incoming`, into the quadrant that
    /// contains each one. Objects straddling a split line stay at `id`.
    ///
    /// Objects go straight into the child's bag, so a child may end up over capacity; it
    /// splits on the next insertion that reaches it.
    fn subdivide(&mut self, id: NodeId, incoming: O) {
        let node = self.node_mut(id);
        let region = node.region;
        let held = core::mem::take(&mut node.objects);
        let children = region.quadrants().map(|r| self.alloc(Node::leaf(r)));

        let mut kept = Vec::new();
        for object in held.into_iter().chain(core::iter::once(incoming)) {
            let aabb = object.aabb();
            match children
                .iter()
                .find(|&&c| self.node(c).region.contains(&aabb))
            {
                Some(&child) => self.node_mut(child).objects.push(object),
                None => kept.push(object),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(node = ?id, ?region, kept = kept.len(), "subdivided leaf");
        let node = self.node_mut(id);
        node.objects = kept;
        node.children = Some(children);
    }

    /// Replace the root with one twice as large in the direction of `aabb`'s center.
    fn grow_toward(&mut self, aabb: &Aabb) {
        let old_root = self.root;
        let region = self.region();
        let (dx, dy) = (
            aabb.center_x() - region.center_x(),
            aabb.center_y() - region.center_y(),
        );
        let Some(toward) = Quadrant::from_offset(dx, dy) else {
            panic!("cannot pick a growth direction for {aabb:?} from root {region:?}");
        };
        assert!(
            region.min_z <= aabb.min_z && aabb.max_z <= region.max_z,
            "depth bounds of {aabb:?} lie outside root {region:?}; growth only extends x and y"
        );

        let (grown, (split_x, split_y)) = region.doubled_toward(toward);
        assert!(
            grown.width().is_finite() && grown.height().is_finite(),
            "quadtree root overflowed while growing toward {aabb:?}"
        );
        let keep = toward.opposite().index();
        let mut children = [old_root; 4];
        for (i, quadrant) in grown.split(split_x, split_y).into_iter().enumerate() {
            if i != keep {
                children[i] = self.alloc(Node::leaf(quadrant));
            }
        }
        self.root = self.alloc(Node {
            region: grown,
            objects: Vec::new(),
            children: Some(children),
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(?toward, from = ?region, to = ?grown, "grew quadtree root");
    }

    fn remove_at(&mut self, id: NodeId, object: &O, aabb: &Aabb) -> bool {
        let node = self.node_mut(id);
        if !node.region.contains(aabb) {
            return false;
        }
        if let Some(pos) = node.objects.iter().position(|o| o == object) {
            node.objects.swap_remove(pos);
            self.prune(id);
            return true;
        }
        let Some(children) = node.children else {
            return false;
        };
        for child in children {
            if self.remove_at(child, object, aabb) {
                self.prune(id);
                return true;
            }
        }
        false
    }

    fn query_at(&self, id: NodeId, region: &Aabb, out: &mut impl Extend<O>) {
        let node = self.node(id);
        if !node.region.intersects(region) {
            return;
        }
        if region.contains(&node.region) {
            self.collect_subtree(id, out);
            return;
        }
        out.extend(
            node.objects
                .iter()
                .filter(|o| o.aabb().intersects(region))
                .cloned(),
        );
        if let Some(children) = node.children {
            for child in children {
                self.query_at(child, region, out);
            }
        }
    }

    fn collect_subtree(&self, id: NodeId, out: &mut impl Extend<O>) {
        let node = self.node(id);
        out.extend(node.objects.iter().cloned());
        if let Some(children) = node.children {
            for child in children {
                self.collect_subtree(child, out);
            }
        }
    }
}
