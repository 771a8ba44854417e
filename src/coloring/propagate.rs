// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first color propagation over the triangle mesh.
//!
//! Starting from a seed vertex colored c11, the traversal walks the dual
//! graph from the first triangle and pushes colors along edges: each edge
//! carries its color from its start vertex to its end vertex through a
//! fixed XOR mask chosen by the edge's mark on the triangle being visited:
//!
//! - marked X: new = old ⊕ c10
//! - marked Y: new = old ⊕ c11
//! - unmarked: new = old ⊕ c01
//!
//! Every mask is non-identity and a fully-marked triangle uses all three,
//! which is what makes the result a proper coloring once the labeling is
//! globally consistent.
//!
//! An edge is propagated while visiting a triangle when the other side of
//! that edge is the mesh boundary or a triangle not currently on the
//! traversal stack. An edge whose start vertex has no color yet is skipped;
//! some later path through the connected mesh assigns it. Triangles may be
//! re-entered through alternate paths, re-propagating the same colors; the
//! writes are idempotent under a consistent labeling.

use crate::coloring::ColorCode;
use crate::geometry::Point;
use crate::mesh::{Mesh, Triangle, TriangleId};

/// The mask an edge applies, keyed by its mark on the visited triangle.
fn transition_mask(triangle: &Triangle, slot: usize) -> ColorCode {
    if triangle.mark_x() == Some(slot) {
        ColorCode::C10
    } else if triangle.mark_y() == Some(slot) {
        ColorCode::C11
    } else {
        ColorCode::C01
    }
}

struct Propagation<'a> {
    mesh: &'a Mesh,
    vertices: &'a [Point],
    /// Caller-slice indices sorted into vertex order, for binary lookup.
    order: Vec<usize>,
    colors: Vec<Option<ColorCode>>,
    on_stack: Vec<bool>,
}

impl Propagation<'_> {
    /// Index of `p` in the caller's vertex slice, or None if absent.
    fn position(&self, p: Point) -> Option<usize> {
        self.order
            .binary_search_by(|&i| self.vertices[i].cmp(&p))
            .ok()
            .map(|found| self.order[found])
    }

    fn traverse(&mut self, id: TriangleId) {
        if self.on_stack[id] {
            return;
        }
        self.on_stack[id] = true;

        let triangle = self.mesh.triangle(id);
        let edges = *triangle.edges();
        let neighbors = *triangle.neighbors();

        for slot in 0..3 {
            let other_side_quiet = neighbors[slot].map_or(true, |n| !self.on_stack[n]);
            if !other_side_quiet {
                continue;
            }
            let edge = edges[slot];
            let (Some(from), Some(to)) = (self.position(edge.s()), self.position(edge.t())) else {
                continue;
            };
            if let Some(color) = self.colors[from] {
                self.colors[to] = Some(color ^ transition_mask(self.mesh.triangle(id), slot));
            }
        }

        for neighbor in neighbors.into_iter().flatten() {
            self.traverse(neighbor);
        }
        self.on_stack[id] = false;
    }
}

/// Propagate vertex colors over the mesh.
///
/// Returns one optional color per entry of `vertices`, in the caller's
/// order; a vertex stays `None` only if no completed edge ever reached it
/// (an empty mesh, or a vertex in no triangle). The caller's slices are not
/// modified.
pub fn propagate_colors(mesh: &Mesh, vertices: &[Point]) -> Vec<Option<ColorCode>> {
    if mesh.is_empty() || vertices.is_empty() {
        return vec![None; vertices.len()];
    }

    let mut order: Vec<usize> = (0..vertices.len()).collect();
    order.sort_by_key(|&i| vertices[i]);

    let mut propagation = Propagation {
        mesh,
        vertices,
        order,
        colors: vec![None; vertices.len()],
        on_stack: vec![false; mesh.len()],
    };

    // Seed: the first triangle's first edge's start vertex is "black".
    let seed = mesh.triangle(0).edges()[0].s();
    if let Some(at) = propagation.position(seed) {
        propagation.colors[at] = Some(ColorCode::C11);
    }
    propagation.traverse(0);
    propagation.colors
}
