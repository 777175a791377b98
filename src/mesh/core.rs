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
use smallvec::SmallVec;

use crate::{
    geometry::point::Point,
    impl_mesh,
    mesh::{basic_types::*, face::Face, half_edge::HalfEdge, vertex::Vertex},
};

impl_mesh! {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: AHashMap::new(),
            boundary_dirty: false,
        }
    }

    /// Builds a mesh from positions and polygon index lists, then wires the
    /// border loops.
    pub fn from_polygons<F: AsRef<[usize]>>(
        positions: impl IntoIterator<Item = Point<T, N>>,
        polygons: impl IntoIterator<Item = F>,
    ) -> Result<Self, MeshError> {
        let mut mesh = Self::new();
        for p in positions {
            mesh.add_vertex(p);
        }
        for polygon in polygons {
            mesh.add_face(polygon.as_ref())?;
        }
        mesh.build_boundary_loops();
        Ok(mesh)
    }

    pub fn add_vertex(&mut self, position: Point<T, N>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(Vertex::new(position));
        idx
    }

    /// Creates a twin pair `from -> to` / `to -> from`, both unbound and each
    /// looping onto itself until a face or border loop claims it.
    /// Returns the `from -> to` half-edge; its twin is the index after it.
    fn new_edge(&mut self, from: usize, to: usize) -> usize {
        let he = self.half_edges.len();
        let twin = he + 1;

        let mut forward = HalfEdge::new(to);
        forward.twin = twin;
        forward.next = he;
        forward.prev = he;

        let mut backward = HalfEdge::new(from);
        backward.twin = he;
        backward.next = twin;
        backward.prev = twin;

        self.half_edges.push(forward);
        self.half_edges.push(backward);
        self.edge_map.insert((from, to), he);
        self.edge_map.insert((to, from), twin);
        self.vertices[from].out_degree += 1;
        self.vertices[to].out_degree += 1;

        he
    }

    #[inline]
    fn link(&mut self, from: usize, to: usize) {
        self.half_edges[from].next = to;
        self.half_edges[to].prev = from;
    }

    /// Adds a polygonal face given its vertex indices in CCW order.
    ///
    /// Shared edges are reused: a border half-edge running in the same
    /// direction is claimed by the new face. The mesh is left untouched when
    /// an error is returned. Call [`Mesh::build_boundary_loops`] once all faces
    /// are in.
    pub fn add_face(&mut self, vertices: &[usize]) -> Result<usize, MeshError> {
        let n = vertices.len();
        if n < 3 {
            return Err(MeshError::DegenerateFace(n));
        }
        for (i, &v) in vertices.iter().enumerate() {
            if v >= self.vertices.len() {
                return Err(MeshError::InvalidVertex(v));
            }
            if vertices[..i].contains(&v) {
                return Err(MeshError::RepeatedVertex(v));
            }
        }
        for i in 0..n {
            let (from, to) = (vertices[i], vertices[(i + 1) % n]);
            if let Some(&he) = self.edge_map.get(&(from, to)) {
                if self.half_edges[he].face.is_some() {
                    return Err(MeshError::NonManifoldEdge { from, to });
                }
            }
        }

        let face_idx = self.faces.len();
        let mut ring: SmallVec<[usize; 8]> = SmallVec::with_capacity(n);
        for i in 0..n {
            let (from, to) = (vertices[i], vertices[(i + 1) % n]);
            let he = match self.edge_map.get(&(from, to)) {
                Some(&border) => border,
                None => self.new_edge(from, to),
            };
            self.half_edges[he].face = Some(face_idx);
            ring.push(he);
        }

        for i in 0..n {
            self.link(ring[i], ring[(i + 1) % n]);
        }

        // Attach representative outgoing half-edges (don't overwrite if already set)
        for (i, &v) in vertices.iter().enumerate() {
            self.vertices[v].half_edge.get_or_insert(ring[i]);
        }

        self.faces.push(Face::new(ring[0]));
        self.boundary_dirty = true;

        Ok(face_idx)
    }

    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> Result<usize, MeshError> {
        self.add_face(&[v0, v1, v2])
    }

    /// Rewires `next`/`prev` of every border half-edge.
    ///
    /// For a border `b = u -> v`, `b.next` is the first border spoke met when
    /// rotating around `v` through the interior faces, starting from `twin(b)`.
    pub fn build_boundary_loops(&mut self) {
        let m = self.half_edges.len();

        let borders: Vec<usize> = (0..m)
            .filter(|&h| self.half_edges[h].face.is_none())
            .collect();

        let mut next_of = vec![usize::MAX; m];
        for &b in &borders {
            let mut t = self.half_edges[b].twin; // interior, leaves head(b)
            let mut steps = 0usize;
            next_of[b] = loop {
                let cand = self.half_edges[self.half_edges[t].prev].twin;
                if self.half_edges[cand].face.is_none() {
                    break cand;
                }
                t = cand;
                steps += 1;
                if steps > m {
                    // Safety bound (should be <= valence at the vertex)
                    break b;
                }
            };
        }

        // Write next, then derive prev from next to guarantee reciprocity
        for &b in &borders {
            self.half_edges[b].next = next_of[b];
        }
        for &b in &borders {
            let nb = next_of[b];
            self.half_edges[nb].prev = b;
        }

        self.boundary_dirty = false;
    }

    /// Rebuilds the border loops only if faces were added since the last build.
    pub fn ensure_boundary_loops(&mut self) {
        if self.boundary_dirty {
            self.build_boundary_loops();
        }
    }

    /// Splits the face bounded by `h0` and `h1` by inserting an edge from
    /// `target(h0)` to `target(h1)`.
    ///
    /// `h0` keeps its face; the loop starting after `h1` moves to a new face.
    /// Returns the new half-edge `target(h0) -> target(h1)`, or `None` when the
    /// two half-edges are not on the same face loop, are adjacent, or the edge
    /// already exists.
    pub fn split_face(&mut self, h0: usize, h1: usize) -> Option<usize> {
        let f0 = self.half_edges[h0].face?;
        if self.half_edges[h1].face != Some(f0) || h0 == h1 {
            return None;
        }

        let v0 = self.half_edges[h0].vertex;
        let v1 = self.half_edges[h1].vertex;
        let h2 = self.half_edges[h0].next;
        let h3 = self.half_edges[h1].next;
        if h2 == h1 || h3 == h0 || self.edge_map.contains_key(&(v0, v1)) {
            return None;
        }

        let h4 = self.new_edge(v0, v1);
        let h5 = self.half_edges[h4].twin;

        let f1 = self.faces.len();
        self.faces.push(Face::new(h1));
        self.faces[f0].half_edge = h0;

        self.link(h0, h4);
        self.link(h4, h3);
        self.half_edges[h4].face = Some(f0);

        self.link(h1, h5);
        self.link(h5, h2);

        let bound = self.half_edges.len();
        let mut h = h2;
        for _ in 0..bound {
            self.half_edges[h].face = Some(f1);
            h = self.half_edges[h].next;
            if h == h2 {
                break;
            }
        }

        Some(h4)
    }
}

impl<T: crate::numeric::scalar::Scalar, const N: usize> Default for Mesh<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
