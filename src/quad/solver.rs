// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first backtracking search for the two mark labelings.
//!
//! The search walks the triangle dual graph and labels edge slots with the
//! two mark classes so that every shared edge is labeled identically from
//! both sides. Pairing adjacent triangles across X-marked edges yields one
//! quadrangulation of the graph; Y-marked edges yield a second, interleaved
//! one.
//!
//! The recursion has three cases per triangle:
//! - both marks set: put the triangle on the search stack and verify all
//!   three neighbors recursively; triangles already on the stack count as
//!   verified, which is what terminates the cycles the dual graph is full of
//! - mark X missing: enumerate open slots, tentatively claim one for X on
//!   this triangle *and* the matching slot on the neighbor across it, then
//!   re-enter; undo both sides before trying the next slot
//! - mark X set, mark Y missing: same for Y
//!
//! A slot is open for a class when neither of this triangle's marks uses it
//! and the neighbor across it (if any) has not claimed that class already.
//!
//! The top level retries the search from every triangle in discovery order,
//! because one starting point's greedy backtracking is not guaranteed to
//! extend over an awkwardly-ordered remainder of the graph. If no start
//! succeeds the mesh is reported infeasible. Whether that can happen for a
//! valid triangulation is unresolved; the restart-and-fail behavior is kept
//! rather than assumed away.

use crate::geometry::Segment;
use crate::mesh::{MarkKind, Mesh, TriangleId};

use super::errors::LabelingFailure;
use super::statistics::{Counters, Statistics};

/// The edges of the two labelings, one list per mark class.
///
/// Each labeled edge is reported exactly once: from its only triangle on
/// the boundary, otherwise from the lower-numbered of its two triangles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkEdges {
    pub marks_x: Vec<Segment>,
    pub marks_y: Vec<Segment>,
}

/// The backtracking solver, carrying its search statistics.
#[derive(Debug, Default)]
pub struct Solver {
    stats: Statistics,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    /// Counters accumulated by `solve` calls on this solver.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Label the mesh, leaving the marks on its triangles and returning the
    /// labeled edges per class.
    ///
    /// On failure every tentative mark has been undone and the mesh is
    /// exactly as it was. An empty mesh succeeds vacuously.
    pub fn solve(&mut self, mesh: &mut Mesh) -> Result<MarkEdges, LabelingFailure> {
        let count = mesh.len();
        if count == 0 {
            return Ok(MarkEdges::default());
        }

        let mut on_stack = vec![false; count];
        for start in 0..count {
            self.stats.increment(Counters::Restarts);
            if self.confirm(mesh, start, &mut on_stack) {
                return Ok(collect_marks(mesh));
            }
        }
        Err(LabelingFailure::Infeasible {
            triangles: count,
            restarts: count,
        })
    }

    fn confirm(&mut self, mesh: &mut Mesh, id: TriangleId, on_stack: &mut [bool]) -> bool {
        if on_stack[id] {
            return true;
        }
        let triangle = &mesh.triangles[id];
        match (triangle.mark_x(), triangle.mark_y()) {
            (Some(_), Some(_)) => {
                on_stack[id] = true;
                let neighbors = *mesh.triangles[id].neighbors();
                let mut ok = true;
                for neighbor in neighbors.into_iter().flatten() {
                    if !self.confirm(mesh, neighbor, on_stack) {
                        ok = false;
                        break;
                    }
                }
                on_stack[id] = false;
                if ok {
                    self.stats.increment(Counters::TrianglesConfirmed);
                }
                ok
            }
            (Some(_), None) => self.try_label(mesh, id, MarkKind::Y, on_stack),
            (None, _) => self.try_label(mesh, id, MarkKind::X, on_stack),
        }
    }

    /// Try every open slot for `kind` on this triangle, claiming the
    /// matching slot on the neighbor across it, and recurse. Both sides are
    /// undone before the next candidate or the final failure.
    fn try_label(
        &mut self,
        mesh: &mut Mesh,
        id: TriangleId,
        kind: MarkKind,
        on_stack: &mut [bool],
    ) -> bool {
        for slot in 0..3 {
            if !slot_open(mesh, id, kind, slot) {
                continue;
            }
            let reciprocal = match mesh.triangles[id].neighbors()[slot] {
                Some(neighbor) => match mesh.triangles[neighbor].slot_back_to(id) {
                    Some(back) => Some((neighbor, back)),
                    // Adjacency should be reciprocal; a slot that is not
                    // cannot carry a consistent label.
                    None => continue,
                },
                None => None,
            };

            mesh.triangles[id].set_mark(kind, Some(slot));
            if let Some((neighbor, back)) = reciprocal {
                mesh.triangles[neighbor].set_mark(kind, Some(back));
            }
            self.stats.increment(Counters::LabelsTried);

            if self.confirm(mesh, id, on_stack) {
                return true;
            }

            mesh.triangles[id].set_mark(kind, None);
            if let Some((neighbor, _)) = reciprocal {
                mesh.triangles[neighbor].set_mark(kind, None);
            }
            self.stats.increment(Counters::LabelsUndone);
        }
        false
    }
}

/// Whether `slot` can still take a `kind` mark on triangle `id`: not used
/// by either of the triangle's marks, and not claimed for `kind` by the
/// neighbor across it.
fn slot_open(mesh: &Mesh, id: TriangleId, kind: MarkKind, slot: usize) -> bool {
    let triangle = &mesh.triangles[id];
    if triangle.mark_x() == Some(slot) || triangle.mark_y() == Some(slot) {
        return false;
    }
    triangle.neighbors()[slot]
        .map_or(true, |neighbor| mesh.triangles[neighbor].mark(kind).is_none())
}

/// Read the finished labeling off the mesh, one edge per marked slot pair.
fn collect_marks(mesh: &Mesh) -> MarkEdges {
    let mut marks = MarkEdges::default();
    for (id, triangle) in mesh.triangles().iter().enumerate() {
        for (kind, list) in [
            (MarkKind::X, &mut marks.marks_x),
            (MarkKind::Y, &mut marks.marks_y),
        ] {
            if let Some(slot) = triangle.mark(kind) {
                let reported_here = match triangle.neighbors()[slot] {
                    None => true,
                    Some(neighbor) => id < neighbor,
                };
                if reported_here {
                    list.push(triangle.edges()[slot]);
                }
            }
        }
    }
    marks
}

/// Label the mesh with a throwaway solver. See [`Solver::solve`].
pub fn quadrangulate(mesh: &mut Mesh) -> Result<MarkEdges, LabelingFailure> {
    Solver::new().solve(mesh)
}
