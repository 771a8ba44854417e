// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mesh builder: sweep the triangulation and link the triangle dual graph.
//!
//! The sweep visits vertices in ascending vertex order. At a vertex V it
//! gathers every triangulated edge whose other endpoint succeeds V (each
//! edge is therefore handled at exactly one of its endpoints) and sorts
//! those endpoints into the angular sector order around V: four quadrants
//! (upper-left, lower-left, lower-right, upper-right), then by slope within
//! a quadrant. Every consecutive pair (L, R) in that order spans a candidate
//! face; the face is real precisely when the closing edge (L, R) is itself
//! part of the triangulation.
//!
//! Adjacency is resolved through the ordered edge map. The first triangle to
//! claim an edge parks `(its id, its slot)` under that edge; the second one
//! to reach the same edge finds the entry, links both triangles through the
//! recorded slots, and deletes it. Entries still parked when the sweep ends
//! belong to boundary edges, whose neighbor slots stay `None`.

use std::cmp::Ordering;

use crate::edge_map::OrderedMap;
use crate::geometry::{Point, Segment};
use crate::mesh::{Mesh, Triangle};

/// Angular sector of `p` around `v`: quadrants numbered counterclockwise
/// from the upper-left half-column, vertical boundaries included in the
/// right-hand quadrants and the horizontal in the upper ones.
fn quadrant(v: Point, p: Point) -> u8 {
    if p.x < v.x && p.y >= v.y {
        1
    } else if p.x < v.x {
        2
    } else if p.y < v.y {
        3
    } else {
        4
    }
}

/// Compare the slopes of v→a and v→b as exact rationals dy/dx, with a
/// vertical direction treated as +infinity (so verticals sort last within
/// a quadrant, and equal to each other).
fn slope_cmp(v: Point, a: Point, b: Point) -> Ordering {
    let (adx, ady) = (a.x - v.x, a.y - v.y);
    let (bdx, bdy) = (b.x - v.x, b.y - v.y);
    match (adx == 0, bdx == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let lhs = ady as i128 * bdx as i128;
            let rhs = bdy as i128 * adx as i128;
            // Cross-multiplying flips the comparison when dx signs differ.
            if (adx > 0) == (bdx > 0) {
                lhs.cmp(&rhs)
            } else {
                rhs.cmp(&lhs)
            }
        }
    }
}

/// The full angular order around `v`: quadrant first, slope second. Ties
/// (coincident directions) are left to the stable sort, so they keep the
/// order the edges appear in the triangulated edge list.
fn sector_order(v: Point, a: Point, b: Point) -> Ordering {
    quadrant(v, a).cmp(&quadrant(v, b)).then_with(|| slope_cmp(v, a, b))
}

/// Build the adjacency-linked triangle mesh of a triangulated graph.
///
/// `edges` must be the output of triangulation over `vertices` (every face
/// of the induced subdivision is a triangle). The input slices are not
/// modified; building twice yields a structurally identical mesh.
pub fn build_mesh(vertices: &[Point], edges: &[Segment]) -> Mesh {
    let mut order = vertices.to_vec();
    order.sort();

    let mut mesh = Mesh::default();
    let mut open: OrderedMap<Segment, (usize, usize), _> = OrderedMap::new(Segment::cmp);

    for &vertex in &order {
        // Successor endpoints of the edges claimed at this vertex. Canonical
        // segment orientation means "claimed here" is exactly `s == vertex`.
        let mut fan: Vec<Point> = edges
            .iter()
            .filter(|e| e.s() == vertex)
            .map(|e| e.t())
            .collect();
        fan.sort_by(|&a, &b| sector_order(vertex, a, b));

        for pair in fan.windows(2) {
            let (left, right) = (pair[0], pair[1]);
            let closing = Segment::new(left, right);
            if !edges.contains(&closing) {
                continue;
            }

            let id = mesh.triangles.len();
            let leg_left = Segment::new(vertex, left);
            let leg_right = Segment::new(vertex, right);
            let mut triangle = Triangle::new([leg_left, leg_right, closing]);

            for (slot, edge) in triangle.edges.into_iter().enumerate() {
                match open.search(&edge).copied() {
                    Some((other, other_slot)) => {
                        triangle.neighbors[slot] = Some(other);
                        mesh.triangles[other].neighbors[other_slot] = Some(id);
                        open.delete(&edge);
                    }
                    None => open.insert(edge, (id, slot)),
                }
            }
            mesh.triangles.push(triangle);
        }
    }
    mesh
}
