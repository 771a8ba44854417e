// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered edge map.
//!
//! A self-balancing binary search tree keyed by a caller-supplied ordering,
//! used by the mesh builder to match triangles across shared edges as the
//! sweep discovers them. The structure itself is domain-agnostic; the mesh
//! builder instantiates it with `Segment` keys and `(TriangleId, slot)`
//! values.

pub mod tree;

pub use tree::OrderedMap;
