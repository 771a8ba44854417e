// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Four-coloring of planar straight-line graphs via interleaved
//! quadrangulations.
//!
//! Given a set of points and non-crossing segments, the crate completes
//! them into a triangulated mesh, decomposes the mesh's triangle-adjacency
//! dual into two overlapping matching-like edge labelings, and uses the
//! labelings to propagate a proper four-coloring over the vertices.
//!
//! # Architecture
//!
//! The pipeline runs in four strict stages, each consuming the previous
//! stage's output:
//!
//! 1. **Triangulation** (`triangulation`): a placeholder visibility
//!    triangulator completes the input edges into a full triangulation,
//!    deterministically in vertex order. Not a constrained Delaunay
//!    triangulation, by design.
//! 2. **Mesh building** (`mesh`): an angular sweep per vertex discovers
//!    every triangular face and links the dual graph, matching triangles
//!    across shared edges through the ordered edge map (`edge_map`).
//! 3. **Quadrangulation** (`quad`): depth-first backtracking labels a
//!    subset of each triangle's edges with two classes, X and Y, so that
//!    shared edges agree from both sides. Each class pairs triangles into
//!    one quadrangulation of the mesh.
//! 4. **Coloring** (`coloring`): a depth-first traversal propagates one of
//!    four colors per vertex, applying a fixed XOR mask per edge keyed by
//!    the edge's mark. The four colors form the Klein four-group, which is
//!    what makes the coloring proper.
//!
//! Triangles live in a dense arena addressed by `TriangleId`, so the cyclic
//! neighbor links of the dual graph are plain optional indices. The whole
//! pipeline is single-threaded and synchronous; the only mutation after
//! mesh building is the solver writing (and, on backtrack, restoring) the
//! mark fields.
//!
//! The editor that collects points and segments, and everything that draws
//! the results, live outside this crate: it receives a validated
//! non-self-intersecting graph and hands back a triangulation, the labeled
//! edges of both classes, and a color per vertex.

pub mod coloring;
pub mod edge_map;
pub mod geometry;
pub mod mesh;
pub mod quad;
pub mod triangulation;

// Re-export the pipeline operations and core types
pub use coloring::{propagate_colors, ColorCode};
pub use edge_map::OrderedMap;
pub use geometry::{segments_cross, Point, Segment};
pub use mesh::{build_mesh, MarkKind, Mesh, Triangle, TriangleId};
pub use quad::{quadrangulate, LabelingFailure, MarkEdges, Solver};
pub use triangulation::triangulate;
