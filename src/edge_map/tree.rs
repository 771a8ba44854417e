// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arena-backed red-black tree with a caller-supplied comparator.
//!
//! The mesh builder needs a dynamic associative structure over edges:
//! entries are inserted when the first triangle claims an edge and deleted
//! when the second one resolves it, interleaved with lookups, thousands of
//! times across a sweep. A height-balanced tree keeps all three operations
//! O(log n).
//!
//! Nodes live in a `Vec` and link to each other by index, with a `NIL`
//! index constant standing in for the null sentinel; freed slots are
//! recycled through a free list. This sidesteps the ownership cycles that
//! parent pointers would otherwise create.
//!
//! The comparator is supplied by the caller: `Less`/`Greater` drive the
//! descent and `Equal` is the match test for `search`/`delete`. Duplicate
//! keys are permitted (equal keys descend right); `search` then finds one
//! of them, and `delete` removes one per call.

use std::cmp::Ordering;

/// Index sentinel for "no node".
const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeColor {
    Red,
    Black,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    color: NodeColor,
    parent: usize,
    left: usize,
    right: usize,
}

/// An ordered map on an arena-backed red-black tree.
///
/// Rebalancing preserves the two height-balance rules: every root-to-leaf
/// path passes the same number of black nodes, and no red node has a red
/// child. Each insert or delete performs a bounded number of rotations and
/// recolorings.
///
/// Deleting a key frees its slot for reuse but leaves the old key/value in
/// place until the slot is reallocated; the arena never shrinks while the
/// map is alive.
pub struct OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    nodes: Vec<Node<K, V>>,
    free: Vec<usize>,
    root: usize,
    len: usize,
    cmp: C,
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Create an empty map ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NIL,
            len: 0,
            cmp,
        }
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up a key, returning its value if present.
    pub fn search(&self, key: &K) -> Option<&V> {
        let mut x = self.root;
        while x != NIL {
            match (self.cmp)(key, &self.nodes[x].key) {
                Ordering::Equal => return Some(&self.nodes[x].value),
                Ordering::Less => x = self.nodes[x].left,
                Ordering::Greater => x = self.nodes[x].right,
            }
        }
        None
    }

    /// Insert a key/value pair. Duplicate keys are kept, not replaced.
    pub fn insert(&mut self, key: K, value: V) {
        let mut y = NIL;
        let mut x = self.root;
        let mut went_left = false;
        while x != NIL {
            y = x;
            went_left = (self.cmp)(&key, &self.nodes[x].key) == Ordering::Less;
            x = if went_left {
                self.nodes[x].left
            } else {
                self.nodes[x].right
            };
        }
        let z = self.alloc(key, value, y);
        if y == NIL {
            self.root = z;
        } else if went_left {
            self.nodes[y].left = z;
        } else {
            self.nodes[y].right = z;
        }
        self.len += 1;
        self.fix_insert(z);
    }

    /// Remove one entry matching `key`. Returns whether anything was removed;
    /// a miss is a no-op.
    pub fn delete(&mut self, key: &K) -> bool {
        let z = self.find(key);
        if z == NIL {
            return false;
        }

        let mut y = z;
        let mut removed_color = self.nodes[y].color;
        let x;
        let x_parent;

        if self.nodes[z].left == NIL {
            x = self.nodes[z].right;
            x_parent = self.nodes[z].parent;
            self.transplant(z, x);
        } else if self.nodes[z].right == NIL {
            x = self.nodes[z].left;
            x_parent = self.nodes[z].parent;
            self.transplant(z, x);
        } else {
            // Two children: splice in the successor, then repair from its
            // old position.
            y = self.subtree_min(self.nodes[z].right);
            removed_color = self.nodes[y].color;
            x = self.nodes[y].right;
            if self.nodes[y].parent == z {
                x_parent = y;
            } else {
                x_parent = self.nodes[y].parent;
                self.transplant(y, x);
                let zr = self.nodes[z].right;
                self.nodes[y].right = zr;
                self.nodes[zr].parent = y;
            }
            self.transplant(z, y);
            let zl = self.nodes[z].left;
            self.nodes[y].left = zl;
            self.nodes[zl].parent = y;
            self.nodes[y].color = self.nodes[z].color;
        }

        self.free.push(z);
        self.len -= 1;
        if removed_color == NodeColor::Black {
            self.fix_delete(x, x_parent);
        }
        true
    }

    /// Smallest key, with its value.
    pub fn minimum(&self) -> Option<(&K, &V)> {
        if self.root == NIL {
            return None;
        }
        let i = self.subtree_min(self.root);
        Some((&self.nodes[i].key, &self.nodes[i].value))
    }

    /// Largest key, with its value.
    pub fn maximum(&self) -> Option<(&K, &V)> {
        if self.root == NIL {
            return None;
        }
        let i = self.subtree_max(self.root);
        Some((&self.nodes[i].key, &self.nodes[i].value))
    }

    /// Smallest entry strictly greater than `key` (which need not be present).
    pub fn successor(&self, key: &K) -> Option<(&K, &V)> {
        let mut x = self.root;
        let mut best = NIL;
        while x != NIL {
            if (self.cmp)(&self.nodes[x].key, key) == Ordering::Greater {
                best = x;
                x = self.nodes[x].left;
            } else {
                x = self.nodes[x].right;
            }
        }
        if best == NIL {
            None
        } else {
            Some((&self.nodes[best].key, &self.nodes[best].value))
        }
    }

    /// Largest entry strictly less than `key` (which need not be present).
    pub fn predecessor(&self, key: &K) -> Option<(&K, &V)> {
        let mut x = self.root;
        let mut best = NIL;
        while x != NIL {
            if (self.cmp)(&self.nodes[x].key, key) == Ordering::Less {
                best = x;
                x = self.nodes[x].right;
            } else {
                x = self.nodes[x].left;
            }
        }
        if best == NIL {
            None
        } else {
            Some((&self.nodes[best].key, &self.nodes[best].value))
        }
    }

    fn alloc(&mut self, key: K, value: V, parent: usize) -> usize {
        let node = Node {
            key,
            value,
            color: NodeColor::Red,
            parent,
            left: NIL,
            right: NIL,
        };
        match self.free.pop() {
            Some(i) => {
                self.nodes[i] = node;
                i
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn find(&self, key: &K) -> usize {
        let mut x = self.root;
        while x != NIL {
            match (self.cmp)(key, &self.nodes[x].key) {
                Ordering::Equal => return x,
                Ordering::Less => x = self.nodes[x].left,
                Ordering::Greater => x = self.nodes[x].right,
            }
        }
        NIL
    }

    fn color(&self, i: usize) -> NodeColor {
        if i == NIL {
            NodeColor::Black
        } else {
            self.nodes[i].color
        }
    }

    fn subtree_min(&self, mut i: usize) -> usize {
        while self.nodes[i].left != NIL {
            i = self.nodes[i].left;
        }
        i
    }

    fn subtree_max(&self, mut i: usize) -> usize {
        while self.nodes[i].right != NIL {
            i = self.nodes[i].right;
        }
        i
    }

    /// Replace the subtree rooted at `u` with the one rooted at `v`.
    fn transplant(&mut self, u: usize, v: usize) {
        let up = self.nodes[u].parent;
        if up == NIL {
            self.root = v;
        } else if u == self.nodes[up].left {
            self.nodes[up].left = v;
        } else {
            self.nodes[up].right = v;
        }
        if v != NIL {
            self.nodes[v].parent = up;
        }
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let yl = self.nodes[y].left;
        self.nodes[x].right = yl;
        if yl != NIL {
            self.nodes[yl].parent = x;
        }
        let xp = self.nodes[x].parent;
        self.nodes[y].parent = xp;
        if xp == NIL {
            self.root = y;
        } else if x == self.nodes[xp].left {
            self.nodes[xp].left = y;
        } else {
            self.nodes[xp].right = y;
        }
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;
        let yr = self.nodes[y].right;
        self.nodes[x].left = yr;
        if yr != NIL {
            self.nodes[yr].parent = x;
        }
        let xp = self.nodes[x].parent;
        self.nodes[y].parent = xp;
        if xp == NIL {
            self.root = y;
        } else if x == self.nodes[xp].right {
            self.nodes[xp].right = y;
        } else {
            self.nodes[xp].left = y;
        }
        self.nodes[y].right = x;
        self.nodes[x].parent = y;
    }

    fn fix_insert(&mut self, mut z: usize) {
        // A red parent is never the root, so the grandparent is live
        // whenever the loop body runs.
        while self.color(self.nodes[z].parent) == NodeColor::Red {
            let p = self.nodes[z].parent;
            let g = self.nodes[p].parent;
            if p == self.nodes[g].left {
                let u = self.nodes[g].right;
                if self.color(u) == NodeColor::Red {
                    self.nodes[u].color = NodeColor::Black;
                    self.nodes[p].color = NodeColor::Black;
                    self.nodes[g].color = NodeColor::Red;
                    z = g;
                } else {
                    if z == self.nodes[p].right {
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].color = NodeColor::Black;
                    self.nodes[g].color = NodeColor::Red;
                    self.rotate_right(g);
                }
            } else {
                let u = self.nodes[g].left;
                if self.color(u) == NodeColor::Red {
                    self.nodes[u].color = NodeColor::Black;
                    self.nodes[p].color = NodeColor::Black;
                    self.nodes[g].color = NodeColor::Red;
                    z = g;
                } else {
                    if z == self.nodes[p].left {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.nodes[z].parent;
                    let g = self.nodes[p].parent;
                    self.nodes[p].color = NodeColor::Black;
                    self.nodes[g].color = NodeColor::Red;
                    self.rotate_left(g);
                }
            }
        }
        let r = self.root;
        self.nodes[r].color = NodeColor::Black;
    }

    /// Restore the black-height balance after removing a black node.
    ///
    /// `x` is the node that took the removed node's place (possibly `NIL`),
    /// `x_parent` its parent; carrying the parent explicitly replaces the
    /// mutable null-sentinel trick of pointer implementations.
    fn fix_delete(&mut self, mut x: usize, mut x_parent: usize) {
        while x != self.root && self.color(x) == NodeColor::Black {
            if x_parent == NIL {
                break;
            }
            if x == self.nodes[x_parent].left {
                let mut s = self.nodes[x_parent].right;
                if self.color(s) == NodeColor::Red {
                    self.nodes[s].color = NodeColor::Black;
                    self.nodes[x_parent].color = NodeColor::Red;
                    self.rotate_left(x_parent);
                    s = self.nodes[x_parent].right;
                }
                // A doubly-black node always has a live sibling.
                let sl = self.nodes[s].left;
                let sr = self.nodes[s].right;
                if self.color(sl) == NodeColor::Black && self.color(sr) == NodeColor::Black {
                    self.nodes[s].color = NodeColor::Red;
                    x = x_parent;
                    x_parent = self.nodes[x].parent;
                } else {
                    if self.color(sr) == NodeColor::Black {
                        if sl != NIL {
                            self.nodes[sl].color = NodeColor::Black;
                        }
                        self.nodes[s].color = NodeColor::Red;
                        self.rotate_right(s);
                        s = self.nodes[x_parent].right;
                    }
                    self.nodes[s].color = self.nodes[x_parent].color;
                    self.nodes[x_parent].color = NodeColor::Black;
                    let sr = self.nodes[s].right;
                    if sr != NIL {
                        self.nodes[sr].color = NodeColor::Black;
                    }
                    self.rotate_left(x_parent);
                    x = self.root;
                    x_parent = NIL;
                }
            } else {
                let mut s = self.nodes[x_parent].left;
                if self.color(s) == NodeColor::Red {
                    self.nodes[s].color = NodeColor::Black;
                    self.nodes[x_parent].color = NodeColor::Red;
                    self.rotate_right(x_parent);
                    s = self.nodes[x_parent].left;
                }
                let sl = self.nodes[s].left;
                let sr = self.nodes[s].right;
                if self.color(sl) == NodeColor::Black && self.color(sr) == NodeColor::Black {
                    self.nodes[s].color = NodeColor::Red;
                    x = x_parent;
                    x_parent = self.nodes[x].parent;
                } else {
                    if self.color(sl) == NodeColor::Black {
                        if sr != NIL {
                            self.nodes[sr].color = NodeColor::Black;
                        }
                        self.nodes[s].color = NodeColor::Red;
                        self.rotate_left(s);
                        s = self.nodes[x_parent].left;
                    }
                    self.nodes[s].color = self.nodes[x_parent].color;
                    self.nodes[x_parent].color = NodeColor::Black;
                    let sl = self.nodes[s].left;
                    if sl != NIL {
                        self.nodes[sl].color = NodeColor::Black;
                    }
                    self.rotate_right(x_parent);
                    x = self.root;
                    x_parent = NIL;
                }
            }
        }
        if x != NIL {
            self.nodes[x].color = NodeColor::Black;
        }
    }
}
