// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Quadrangulation solver.
//!
//! Labels the triangle dual graph with the two mark classes, X and Y, so
//! that every triangle carries both marks on distinct edge slots and every
//! shared edge is labeled identically from both sides. The X-marked edges
//! pair adjacent triangles into one quadrangulation of the mesh, the
//! Y-marked edges into a second, interleaved one; the coloring propagator
//! keys its transition rule off these marks.

pub mod errors;
pub mod solver;
pub mod statistics;

pub use errors::LabelingFailure;
pub use solver::{quadrangulate, MarkEdges, Solver};
pub use statistics::{Counters, Statistics};
