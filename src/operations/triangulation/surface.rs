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

use crate::{
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::triangulation::{
        CostPlanner, DiagonalCommitter, FaceOutcome, Objective, Polygon, TriangulationError,
        TriangulationReport, ValidityGate,
    },
};

/// Plans and commits optimal triangulations of polygonal faces.
///
/// ```
/// use surface_triangulation::geometry::Point3;
/// use surface_triangulation::mesh::Mesh;
/// use surface_triangulation::operations::triangulation::Objective;
///
/// let mut mesh = Mesh::<f64, 3>::from_polygons(
///     [
///         Point3::from_vals([0.0, 0.0, 0.0]),
///         Point3::from_vals([1.0, 0.0, 0.0]),
///         Point3::from_vals([1.0, 1.0, 0.0]),
///         Point3::from_vals([0.0, 1.0, 0.0]),
///     ],
///     [[0, 1, 2, 3]],
/// )
/// .unwrap();
///
/// let report = mesh.triangulate(Objective::MinArea);
/// assert_eq!(report.diagonals_inserted, 1);
/// assert_eq!(mesh.faces.len(), 2);
/// ```
#[derive(Debug)]
pub struct SurfaceTriangulation<'a, T: Scalar> {
    mesh: &'a mut Mesh<T, 3>,
    gate: ValidityGate,
}

impl<'a, T: Scalar> SurfaceTriangulation<'a, T> {
    pub fn new(mesh: &'a mut Mesh<T, 3>) -> Self {
        Self {
            mesh,
            gate: ValidityGate::default(),
        }
    }

    pub fn with_validity_gate(mut self, gate: ValidityGate) -> Self {
        self.gate = gate;
        self
    }

    /// Triangulates every face present when the call starts. Faces created by
    /// the splits are triangles and need no further work.
    pub fn triangulate(&mut self, objective: Objective) -> TriangulationReport {
        self.mesh.ensure_boundary_loops();

        let mut report = TriangulationReport::default();
        for face in self.mesh.face_indices() {
            let result = self.triangulate_loaded_face(face, objective);
            report.record(&result);
        }

        log::debug!("triangulation ({objective}) finished: {report:?}");
        report
    }

    /// Triangulates a single face.
    pub fn triangulate_face(
        &mut self,
        face: usize,
        objective: Objective,
    ) -> Result<FaceOutcome, TriangulationError> {
        self.mesh.ensure_boundary_loops();
        self.triangulate_loaded_face(face, objective)
    }

    fn triangulate_loaded_face(
        &mut self,
        face: usize,
        objective: Objective,
    ) -> Result<FaceOutcome, TriangulationError> {
        let polygon = match Polygon::collect(&*self.mesh, face) {
            Ok(polygon) => polygon,
            Err(err) => {
                log::warn!("skipping face: {err}");
                return Err(err);
            }
        };

        let sides = polygon.len();
        if sides <= 3 {
            log::trace!("face {face} has {sides} sides; nothing to do");
            return Ok(FaceOutcome::Untouched { sides });
        }

        let plan = CostPlanner::new(&*self.mesh, &polygon, objective)
            .with_validity_gate(self.gate)
            .plan();

        let stats = DiagonalCommitter::new(&mut *self.mesh, &polygon).commit(&plan);

        Ok(FaceOutcome::Triangulated {
            sides,
            inserted: stats.inserted,
            unresolved: stats.unresolved,
        })
    }
}

impl<T: Scalar> Mesh<T, 3> {
    /// Triangulates every polygonal face with the default validity gate.
    pub fn triangulate(&mut self, objective: Objective) -> TriangulationReport {
        SurfaceTriangulation::new(self).triangulate(objective)
    }

    /// Triangulates one face with the default validity gate.
    pub fn triangulate_face(
        &mut self,
        face: usize,
        objective: Objective,
    ) -> Result<FaceOutcome, TriangulationError> {
        SurfaceTriangulation::new(self).triangulate_face(face, objective)
    }
}
