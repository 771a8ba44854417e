// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the quadrangulation search.

use std::error::Error;
use std::fmt;

/// Failure to produce a consistent pair of labelings.
///
/// Reported as a value, never a panic: the caller decides whether to retry
/// with a different mesh or surface the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelingFailure {
    /// Every restart point was exhausted without finding a complete,
    /// consistent labeling.
    Infeasible { triangles: usize, restarts: usize },
}

impl fmt::Display for LabelingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelingFailure::Infeasible {
                triangles,
                restarts,
            } => {
                write!(
                    f,
                    "No consistent labeling of {} triangles after {} restarts",
                    triangles, restarts
                )
            }
        }
    }
}

impl Error for LabelingFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let failure = LabelingFailure::Infeasible {
            triangles: 7,
            restarts: 7,
        };
        assert_eq!(
            failure.to_string(),
            "No consistent labeling of 7 triangles after 7 restarts"
        );
    }
}
