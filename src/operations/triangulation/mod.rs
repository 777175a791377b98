// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Optimal triangulation of polygonal mesh faces.
//!
//! Each face is handled in two steps. [`CostPlanner`] runs the classic
//! O(n³) interval dynamic program over the face boundary and yields an
//! immutable [`TriangulationPlan`]; [`DiagonalCommitter`] then walks the plan
//! and splits the live face one diagonal at a time.

use std::{fmt, str::FromStr};

pub mod committer;
pub mod planner;
pub mod polygon;
pub mod surface;

pub use committer::{CommitStats, DiagonalCommitter, DiagonalInsertion};
pub use planner::{CostPlanner, TriangulationPlan};
pub use polygon::Polygon;
pub use surface::SurfaceTriangulation;

/// Cost criterion driving the optimization. Exactly one is active for a
/// whole triangulation call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Minimize the sum of per-triangle squared cross-product magnitudes
    /// (proportional to squared area).
    #[default]
    MinArea,
    /// Minimize the largest per-triangle maximum angle cosine, i.e. maximize
    /// the smallest angle.
    MaxAngle,
}

impl Objective {
    pub fn name(self) -> &'static str {
        match self {
            Objective::MinArea => "min-area",
            Objective::MaxAngle => "max-angle",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = TriangulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "min-area" | "area" => Ok(Objective::MinArea),
            "max-angle" | "angle" => Ok(Objective::MaxAngle),
            _ => Err(TriangulationError::UnknownObjective(s.to_string())),
        }
    }
}

/// Numeric selectors as stored by callers that keep the objective as an id:
/// `0` is [`Objective::MinArea`], `1` is [`Objective::MaxAngle`].
impl TryFrom<u8> for Objective {
    type Error = TriangulationError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Objective::MinArea),
            1 => Ok(Objective::MaxAngle),
            _ => Err(TriangulationError::UnknownObjective(id.to_string())),
        }
    }
}

/// Rule deciding when a candidate triangle is forbidden outright.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidityGate {
    /// Forbid a triangle only when all three of its edges already exist
    /// somewhere in the mesh.
    #[default]
    AllEdgesExist,
    /// Forbid a triangle when any of its edges already exists as an interior
    /// edge. Stricter; changes results on meshes where a face boundary
    /// touches itself through other faces.
    AnyInteriorEdge,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TriangulationError {
    #[error("face {0} does not exist")]
    InvalidFace(usize),
    /// The face touches a non-manifold vertex; it is skipped.
    #[error("face {face} has non-manifold boundary vertex {vertex}")]
    NonManifoldVertex { face: usize, vertex: usize },
    /// Selector outside the supported objectives. Callers should treat this
    /// as a broken contract and stop.
    #[error("unknown triangulation objective {0:?}")]
    UnknownObjective(String),
}

/// What happened to a face that was not skipped with an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceOutcome {
    /// The face has three or fewer sides and was left as is.
    Untouched { sides: usize },
    /// The face was split. `unresolved` counts diagonals the plan asked for
    /// that could not be located in the live topology.
    Triangulated {
        sides: usize,
        inserted: usize,
        unresolved: usize,
    },
}

/// Totals for a triangulate-all run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriangulationReport {
    pub faces_triangulated: usize,
    pub faces_untouched: usize,
    pub faces_non_manifold: usize,
    pub diagonals_inserted: usize,
    pub diagonals_unresolved: usize,
}

impl TriangulationReport {
    pub(crate) fn record(&mut self, result: &Result<FaceOutcome, TriangulationError>) {
        match result {
            Ok(FaceOutcome::Untouched { .. }) => self.faces_untouched += 1,
            Ok(FaceOutcome::Triangulated {
                inserted,
                unresolved,
                ..
            }) => {
                self.faces_triangulated += 1;
                self.diagonals_inserted += inserted;
                self.diagonals_unresolved += unresolved;
            }
            Err(TriangulationError::NonManifoldVertex { .. }) => self.faces_non_manifold += 1,
            Err(_) => {}
        }
    }

    /// True when every face was either untouched or fully triangulated.
    pub fn is_clean(&self) -> bool {
        self.faces_non_manifold == 0 && self.diagonals_unresolved == 0
    }
}
