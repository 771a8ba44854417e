// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for the full pipeline on random point sets.
//!
//! Random points in general position (pairwise distinct, no three
//! collinear) are triangulated from scratch and pushed through the whole
//! pipeline. The triangulation and mesh properties must always hold; the
//! labeling and coloring properties are asserted whenever the solver finds
//! a labeling, which is the only case where a proper coloring is promised.

use proptest::prelude::*;

use four_color::{
    build_mesh, propagate_colors, quadrangulate, segments_cross, triangulate, MarkKind, Point,
};

fn collinear(a: Point, b: Point, c: Point) -> bool {
    (b.y - a.y) as i128 * (c.x - b.x) as i128 == (b.x - a.x) as i128 * (c.y - b.y) as i128
}

fn general_position(points: &[Point]) -> bool {
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i] == points[j] {
                return false;
            }
            for k in j + 1..points.len() {
                if collinear(points[i], points[j], points[k]) {
                    return false;
                }
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pipeline_properties_on_random_points(
        raw in proptest::collection::vec((0i64..60, 0i64..60), 3..7)
    ) {
        let vertices: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        prop_assume!(general_position(&vertices));

        let edges = triangulate(&vertices, &[]);
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                prop_assert!(!segments_cross(a, b), "{:?} crosses {:?}", a, b);
            }
        }

        let mut mesh = build_mesh(&vertices, &edges);
        for (id, triangle) in mesh.triangles().iter().enumerate() {
            for (slot, neighbor) in triangle.neighbors().iter().enumerate() {
                if let Some(n) = *neighbor {
                    let back = mesh.triangle(n).slot_back_to(id);
                    prop_assert!(back.is_some(), "{} -> {} not reciprocal", id, n);
                    prop_assert_eq!(
                        mesh.triangle(n).edges()[back.unwrap()],
                        triangle.edges()[slot]
                    );
                }
            }
        }

        if quadrangulate(&mut mesh).is_ok() {
            for (id, triangle) in mesh.triangles().iter().enumerate() {
                prop_assert!(triangle.mark_x().is_some());
                prop_assert!(triangle.mark_y().is_some());
                prop_assert_ne!(triangle.mark_x(), triangle.mark_y());
                for kind in [MarkKind::X, MarkKind::Y] {
                    let slot = triangle.mark(kind).unwrap();
                    if let Some(neighbor) = triangle.neighbors()[slot] {
                        let back = mesh.triangle(neighbor).slot_back_to(id).unwrap();
                        prop_assert_eq!(mesh.triangle(neighbor).mark(kind), Some(back));
                    }
                }
            }

            let colors = propagate_colors(&mesh, &vertices);
            for triangle in mesh.triangles() {
                for edge in triangle.edges() {
                    let at = |p: Point| {
                        colors[vertices.iter().position(|&v| v == p).unwrap()]
                    };
                    let (s, t) = (at(edge.s()), at(edge.t()));
                    prop_assert!(s.is_some(), "uncolored start of {:?}", edge);
                    prop_assert!(t.is_some(), "uncolored end of {:?}", edge);
                    prop_assert_ne!(s, t, "edge {:?} joins equal colors", edge);
                }
            }
        }
    }

    #[test]
    fn triangulation_is_deterministic_under_permutation(
        raw in proptest::collection::vec((0i64..60, 0i64..60), 3..6),
        seed in 0usize..24,
    ) {
        let vertices: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        prop_assume!(general_position(&vertices));

        let mut shuffled = vertices.clone();
        let rot = seed % shuffled.len();
        shuffled.rotate_left(rot);
        prop_assert_eq!(triangulate(&vertices, &[]), triangulate(&shuffled, &[]));
    }
}
