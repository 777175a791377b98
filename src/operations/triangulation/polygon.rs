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
    mesh::basic_types::Mesh, numeric::scalar::Scalar,
    operations::triangulation::TriangulationError,
};

/// Snapshot of one face boundary, taken before any diagonal is inserted.
///
/// `half_edges[i]` points at `vertices[i]`. Both sequences stay fixed while the
/// mesh is split underneath them, so plan indices keep meaning the same
/// boundary corners for the whole commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    face: usize,
    half_edges: Vec<usize>,
    vertices: Vec<usize>,
}

impl Polygon {
    /// Walks the loop of `face` from its stored half-edge. Fails if the face
    /// does not exist or if any boundary vertex is non-manifold.
    pub fn collect<T: Scalar, const N: usize>(
        mesh: &Mesh<T, N>,
        face: usize,
    ) -> Result<Self, TriangulationError> {
        if face >= mesh.faces.len() {
            return Err(TriangulationError::InvalidFace(face));
        }

        let loop_half_edges = mesh.face_half_edges(face);
        let mut half_edges = Vec::with_capacity(loop_half_edges.len());
        let mut vertices = Vec::with_capacity(loop_half_edges.len());
        for h in loop_half_edges {
            let v = mesh.target(h);
            if !mesh.is_manifold(v) {
                return Err(TriangulationError::NonManifoldVertex { face, vertex: v });
            }
            half_edges.push(h);
            vertices.push(v);
        }

        Ok(Self {
            face,
            half_edges,
            vertices,
        })
    }

    pub fn face(&self) -> usize {
        self.face
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, i: usize) -> usize {
        self.vertices[i]
    }

    pub fn half_edge(&self, i: usize) -> usize {
        self.half_edges[i]
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn half_edges(&self) -> &[usize] {
        &self.half_edges
    }
}
