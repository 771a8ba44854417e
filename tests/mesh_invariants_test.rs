// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural invariants of built meshes.
//!
//! Every non-boundary edge must be referenced by exactly two triangles,
//! through mutually consistent neighbor slots; every boundary edge by
//! exactly one, with its neighbor slot empty. Building twice must give a
//! structurally identical mesh.

use std::collections::HashMap;

use four_color::{build_mesh, triangulate, Mesh, Point, Segment};

fn pt(x: i64, y: i64) -> Point {
    Point::new(x, y)
}

fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
    Segment::new(pt(a.0, a.1), pt(b.0, b.1))
}

fn assert_edge_reference_invariants(mesh: &Mesh) {
    let mut references: HashMap<Segment, Vec<(usize, usize)>> = HashMap::new();
    for (id, triangle) in mesh.triangles().iter().enumerate() {
        for (slot, edge) in triangle.edges().iter().enumerate() {
            references.entry(*edge).or_default().push((id, slot));
        }
    }

    for (edge, holders) in &references {
        match holders.as_slice() {
            [(id, slot)] => {
                assert_eq!(
                    mesh.triangle(*id).neighbors()[*slot],
                    None,
                    "boundary edge {:?} has a neighbor",
                    edge
                );
            }
            [(id_a, slot_a), (id_b, slot_b)] => {
                assert_eq!(
                    mesh.triangle(*id_a).neighbors()[*slot_a],
                    Some(*id_b),
                    "interior edge {:?} not linked a→b",
                    edge
                );
                assert_eq!(
                    mesh.triangle(*id_b).neighbors()[*slot_b],
                    Some(*id_a),
                    "interior edge {:?} not linked b→a",
                    edge
                );
            }
            other => panic!("edge {:?} referenced {} times", edge, other.len()),
        }
    }
}

#[test]
fn square_mesh_invariants() {
    let vertices = [pt(0, 0), pt(10, 0), pt(10, 10), pt(0, 10)];
    let boundary = [
        seg((0, 0), (10, 0)),
        seg((10, 0), (10, 10)),
        seg((10, 10), (0, 10)),
        seg((0, 10), (0, 0)),
    ];
    let edges = triangulate(&vertices, &boundary);
    let mesh = build_mesh(&vertices, &edges);
    assert_eq!(mesh.len(), 2);
    assert_edge_reference_invariants(&mesh);
}

#[test]
fn strip_mesh_invariants() {
    let vertices = [pt(0, 0), pt(0, 10), pt(10, 0), pt(10, 10), pt(20, 5)];
    let edges = triangulate(&vertices, &[]);
    let mesh = build_mesh(&vertices, &edges);
    assert_eq!(mesh.len(), 3);
    assert_edge_reference_invariants(&mesh);
}

#[test]
fn general_position_mesh_invariants() {
    let vertices = [
        pt(0, 3),
        pt(5, 11),
        pt(11, 2),
        pt(17, 19),
        pt(23, 7),
        pt(29, 13),
    ];
    let edges = triangulate(&vertices, &[]);
    let mesh = build_mesh(&vertices, &edges);
    assert!(!mesh.is_empty());
    assert_edge_reference_invariants(&mesh);
}

#[test]
fn build_mesh_is_idempotent() {
    let vertices = [
        pt(0, 3),
        pt(5, 11),
        pt(11, 2),
        pt(17, 19),
        pt(23, 7),
        pt(29, 13),
    ];
    let edges = triangulate(&vertices, &[]);
    let first = build_mesh(&vertices, &edges);
    let second = build_mesh(&vertices, &edges);
    assert_eq!(first, second);
}
