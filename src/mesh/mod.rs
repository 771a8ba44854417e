// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangle mesh: faces of the triangulation and their adjacency.
//!
//! - Triangle / Mesh: the dense face arena with slot-aligned edges,
//!   neighbor links, and quadrangulation marks
//! - build_mesh: the angular sweep that discovers every face and links the
//!   dual graph in a single pass per vertex

pub mod builder;
pub mod triangle;

pub use builder::build_mesh;
pub use triangle::{MarkKind, Mesh, Triangle, TriangleId};
