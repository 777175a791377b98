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

use ahash::AHashMap;

use crate::{
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Errors raised while building mesh connectivity.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("vertex {0} does not exist")]
    InvalidVertex(usize),
    #[error("a face needs at least 3 vertices, got {0}")]
    DegenerateFace(usize),
    #[error("vertex {0} appears more than once in the same face")]
    RepeatedVertex(usize),
    #[error("directed edge ({from}, {to}) is already bound to a face")]
    NonManifoldEdge { from: usize, to: usize },
}

/// Half-edge polygon mesh stored as flat arenas addressed by `usize` handles.
///
/// Every edge is a pair of twin half-edges. A half-edge with `face == None`
/// lies on the border, and border half-edges form their own loops once
/// [`Mesh::build_boundary_loops`] has run.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar, const N: usize> {
    pub vertices: Vec<Vertex<T, N>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,

    /// Directed `(from, to)` vertex pair to half-edge.
    pub edge_map: AHashMap<(usize, usize), usize>,
    /// Set when faces were added since the border loops were last rebuilt.
    pub(crate) boundary_dirty: bool,
}
