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

use ahash::AHashSet;
use smallvec::SmallVec;

use crate::impl_mesh;

impl_mesh! {
    #[inline]
    pub fn source(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].twin].vertex
    }

    #[inline]
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    #[inline]
    pub fn next(&self, he: usize) -> usize {
        self.half_edges[he].next
    }

    #[inline]
    pub fn twin(&self, he: usize) -> usize {
        self.half_edges[he].twin
    }

    #[inline]
    pub fn is_boundary(&self, he: usize) -> bool {
        self.half_edges[he].face.is_none()
    }

    pub fn face_indices(&self) -> std::ops::Range<usize> {
        0..self.faces.len()
    }

    /// Returns the half-edges of the loop that contains `start`, beginning
    /// with `start`. The walk is bounded by the number of half-edges, so a
    /// corrupted loop cannot hang the caller.
    pub fn half_edge_loop(&self, start: usize) -> SmallVec<[usize; 8]> {
        let mut result = SmallVec::new();
        let mut h = start;
        for _ in 0..self.half_edges.len() {
            result.push(h);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Returns the indices of the half-edges bounding face `f`,
    /// in CCW order.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 8]> {
        self.half_edge_loop(self.faces[f].half_edge)
    }

    /// Returns the vertices of face `f`, starting at the source of its stored
    /// half-edge.
    pub fn face_vertices(&self, f: usize) -> SmallVec<[usize; 8]> {
        self.face_half_edges(f)
            .into_iter()
            .map(|he| self.source(he))
            .collect()
    }

    /// Number of sides of face `f`.
    pub fn face_degree(&self, f: usize) -> usize {
        self.face_half_edges(f).len()
    }

    /// Returns all outgoing half-edges of vertex `v` reachable by rotating
    /// around it. Works even on meshes with open boundaries,
    /// *provided* the border loops are up to date.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let Some(start) = self.vertices[v].half_edge else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut h = start;
        for _ in 0..self.half_edges.len() {
            result.push(h);
            let t = self.half_edges[h].twin;
            h = self.half_edges[t].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Returns true if vertex `v` has any outgoing border half-edge.
    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        self.outgoing_half_edges(v)
            .into_iter()
            .any(|he| self.half_edges[he].face.is_none())
    }

    /// A vertex is manifold when its incident faces form a single fan: the
    /// rotation around it reaches every outgoing half-edge and crosses the
    /// border at most once. Isolated vertices count as manifold.
    pub fn is_manifold(&self, v: usize) -> bool {
        let ring = self.outgoing_half_edges(v);
        if ring.len() != self.vertices[v].out_degree {
            return false;
        }
        ring.iter()
            .filter(|&&he| self.half_edges[he].face.is_none())
            .count()
            < 2
    }

    /// Returns the one-ring neighbors of vertex `v`.
    pub fn one_ring_neighbors(&self, v: usize) -> Vec<usize> {
        self.outgoing_half_edges(v)
            .iter()
            .map(|&he_idx| self.half_edges[he_idx].vertex)
            .collect()
    }

    pub fn half_edge_between(&self, vi0: usize, vi1: usize) -> Option<usize> {
        self.edge_map.get(&(vi0, vi1)).copied()
    }

    /// Checks if two vertices have an edge between them in the mesh.
    pub fn are_vertices_connected(&self, vertex_a: usize, vertex_b: usize) -> bool {
        self.edge_map.contains_key(&(vertex_a, vertex_b))
            || self.edge_map.contains_key(&(vertex_b, vertex_a))
    }

    /// True if `a`–`b` is an existing edge with faces on both sides.
    pub fn is_interior_edge(&self, a: usize, b: usize) -> bool {
        match self.half_edge_between(a, b) {
            Some(h) => !self.is_boundary(h) && !self.is_boundary(self.twin(h)),
            None => false,
        }
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// Panics with a description of the first broken connectivity invariant.
    /// Intended for tests and debug checks; border loops must be up to date.
    pub fn validate_connectivity(&self) {
        // For every half-edge, check next/prev/twin consistency:
        for (i, he) in self.half_edges.iter().enumerate() {
            assert_eq!(
                self.half_edges[he.next].prev, i,
                "he {} next -> prev mismatch",
                i
            );
            assert_eq!(
                self.half_edges[he.prev].next, i,
                "he {} prev -> next mismatch",
                i
            );
            assert_eq!(
                self.half_edges[he.twin].twin, i,
                "he {} twin -> twin mismatch",
                i
            );
            assert_eq!(
                self.source(he.next),
                he.vertex,
                "he {} next does not leave its target",
                i
            );
            assert_eq!(
                self.half_edges[he.next].face, he.face,
                "he {} next lies on another face",
                i
            );
        }

        let mut edge_set = AHashSet::new();
        for (i, he) in self.half_edges.iter().enumerate() {
            let src = self.source(i);
            let dst = he.vertex;
            assert!(
                edge_set.insert((src, dst)),
                "duplicate half-edge ({},{})",
                src,
                dst
            );
            assert_eq!(
                self.edge_map.get(&(src, dst)),
                Some(&i),
                "edge map out of date for ({},{})",
                src,
                dst
            );
        }

        // Check every face's entry half_edge still belongs to that face:
        for (fi, face) in self.faces.iter().enumerate() {
            let start = face.half_edge;
            let mut cur = start;
            loop {
                assert_eq!(
                    self.half_edges[cur].face,
                    Some(fi),
                    "face {} half-edge {} points at wrong face",
                    fi,
                    cur
                );
                cur = self.half_edges[cur].next;
                if cur == start {
                    break;
                }
            }
        }

        // Check every vertex's half_edge really leaves that vertex:
        for (vi, v) in self.vertices.iter().enumerate() {
            if let Some(he0) = v.half_edge {
                assert_eq!(
                    self.source(he0),
                    vi,
                    "vertex {}: half_edge {} is not outgoing from this vertex",
                    vi,
                    he0
                );
            }
        }
    }
}
