// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Placeholder visibility triangulator.
//!
//! Turns a non-self-intersecting planar straight-line graph into a full
//! triangulation by brute force: vertices are processed in ascending vertex
//! order, and each one tries to connect to every vertex processed before
//! it, keeping the connection unless it already exists or it crosses an
//! accepted segment. The result is the input edges plus the added ones, in
//! a fully deterministic order.
//!
//! This is not a constrained Delaunay triangulation and makes no optimality
//! claim; it is an O(n²) visibility test per vertex whose tie-breaking is
//! exactly the processing order. Coincident or collinear degeneracies are
//! resolved by that order too, never rejected.

use crate::geometry::{segments_cross, Point, Segment};

/// Triangulate the graph `(vertices, edges)`.
///
/// Returns the input edges (sorted) followed by every added edge in
/// discovery order. The input slices are not modified; both are sorted into
/// private copies first, so the output depends only on the input sets.
pub fn triangulate(vertices: &[Point], edges: &[Segment]) -> Vec<Segment> {
    let mut pending = vertices.to_vec();
    pending.sort();
    let mut accepted = edges.to_vec();
    accepted.sort();

    let mut placed: Vec<Point> = Vec::with_capacity(pending.len());
    for &vertex in &pending {
        for &seen in &placed {
            let candidate = Segment::new(seen, vertex);
            if accepted.contains(&candidate) {
                continue;
            }
            if accepted.iter().any(|line| segments_cross(&candidate, line)) {
                continue;
            }
            accepted.push(candidate);
        }
        placed.push(vertex);
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
        Segment::new(pt(a.0, a.1), pt(b.0, b.1))
    }

    #[test]
    fn test_bare_triangle() {
        let vertices = [pt(0, 0), pt(0, 10), pt(10, 0)];
        let out = triangulate(&vertices, &[]);
        assert_eq!(out.len(), 3);
        assert!(out.contains(&seg((0, 0), (0, 10))));
        assert!(out.contains(&seg((0, 0), (10, 0))));
        assert!(out.contains(&seg((0, 10), (10, 0))));
    }

    #[test]
    fn test_square_gains_exactly_one_diagonal() {
        let vertices = [pt(0, 0), pt(10, 0), pt(10, 10), pt(0, 10)];
        let edges = [
            seg((0, 0), (10, 0)),
            seg((10, 0), (10, 10)),
            seg((10, 10), (0, 10)),
            seg((0, 10), (0, 0)),
        ];
        let out = triangulate(&vertices, &edges);
        assert_eq!(out.len(), 5);
        // The added diagonal connects (0,10) and (10,0); the other diagonal
        // would cross it and is not added.
        assert!(out.contains(&seg((0, 10), (10, 0))));
        assert!(!out.contains(&seg((0, 0), (10, 10))));
    }

    #[test]
    fn test_existing_edges_not_duplicated() {
        let vertices = [pt(0, 0), pt(0, 10), pt(10, 0)];
        let edges = [seg((0, 0), (0, 10))];
        let out = triangulate(&vertices, &edges);
        assert_eq!(out.len(), 3);
        assert_eq!(
            out.iter().filter(|&&e| e == seg((0, 0), (0, 10))).count(),
            1
        );
    }

    #[test]
    fn test_no_added_edge_crosses_another() {
        let vertices = [pt(0, 0), pt(4, 9), pt(9, 1), pt(13, 12), pt(20, 3)];
        let out = triangulate(&vertices, &[]);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert!(!segments_cross(a, b), "{:?} crosses {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_deterministic_under_input_shuffle() {
        let vertices = [pt(0, 0), pt(4, 9), pt(9, 1), pt(13, 12)];
        let shuffled = [pt(13, 12), pt(9, 1), pt(0, 0), pt(4, 9)];
        assert_eq!(triangulate(&vertices, &[]), triangulate(&shuffled, &[]));
    }

    #[test]
    fn test_collinear_points_are_processed_not_rejected() {
        // Three collinear points: the long chord is accepted before the far
        // point's short edges, by processing order.
        let vertices = [pt(0, 0), pt(5, 0), pt(10, 0)];
        let out = triangulate(&vertices, &[]);
        assert!(out.contains(&seg((0, 0), (5, 0))));
        // (0,0)-(10,0) shares an endpoint with (0,0)-(5,0), so the overlap
        // is not seen as a crossing; the degenerate chord is kept.
        assert!(out.contains(&seg((0, 0), (10, 0))));
    }
}
