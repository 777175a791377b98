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
    operations::triangulation::{Polygon, TriangulationPlan},
};

/// Result of asking for one diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagonalInsertion {
    /// The two corners were already connected.
    Existing,
    /// A new edge was inserted; holds the new half-edge.
    Inserted(usize),
    /// Neither corner's live face loop reaches the other corner.
    Unresolved,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub inserted: usize,
    pub existing: usize,
    pub unresolved: usize,
}

/// Turns a [`TriangulationPlan`] into face splits on the live mesh.
#[derive(Debug)]
pub struct DiagonalCommitter<'a, T: Scalar, const N: usize> {
    mesh: &'a mut Mesh<T, N>,
    polygon: &'a Polygon,
}

impl<'a, T: Scalar, const N: usize> DiagonalCommitter<'a, T, N> {
    pub fn new(mesh: &'a mut Mesh<T, N>, polygon: &'a Polygon) -> Self {
        Self { mesh, polygon }
    }

    /// Depth-first walk of the split table from the whole range, inserting
    /// the two sides of every planned triangle.
    pub fn commit(&mut self, plan: &TriangulationPlan<T>) -> CommitStats {
        let mut stats = CommitStats::default();
        let n = plan.len();
        if n < 3 {
            return stats;
        }

        let mut todo = Vec::with_capacity(n);
        todo.push((0, n - 1));
        while let Some((start, end)) = todo.pop() {
            if end - start < 2 {
                continue;
            }
            let Some(split) = plan.split(start, end) else {
                continue;
            };

            for (p, q) in [(start, split), (split, end)] {
                match self.insert_diagonal(p, q) {
                    DiagonalInsertion::Existing => stats.existing += 1,
                    DiagonalInsertion::Inserted(_) => stats.inserted += 1,
                    DiagonalInsertion::Unresolved => stats.unresolved += 1,
                }
            }

            todo.push((start, split));
            todo.push((split, end));
        }

        stats
    }

    /// Connects boundary corners `p` and `q` of the original polygon.
    ///
    /// Earlier splits may have moved `p`'s boundary half-edge into a smaller
    /// loop that no longer holds `q`, so both corners are tried as the
    /// starting point.
    pub fn insert_diagonal(&mut self, p: usize, q: usize) -> DiagonalInsertion {
        let v_p = self.polygon.vertex(p);
        let v_q = self.polygon.vertex(q);

        if self.mesh.half_edge_between(v_p, v_q).is_some() {
            return DiagonalInsertion::Existing;
        }

        for (from, to) in [(p, v_q), (q, v_p)] {
            let h0 = self.polygon.half_edge(from);
            if let Some(h) = self.find_on_loop(h0, to) {
                if let Some(inserted) = self.mesh.split_face(h0, h) {
                    return DiagonalInsertion::Inserted(inserted);
                }
            }
        }

        log::error!(
            "face {}: no live face loop joins vertices {} and {}; diagonal skipped",
            self.polygon.face(),
            v_p,
            v_q
        );
        DiagonalInsertion::Unresolved
    }

    /// First half-edge after `h0` on its current loop that points at `target`.
    fn find_on_loop(&self, h0: usize, target: usize) -> Option<usize> {
        self.mesh
            .half_edge_loop(h0)
            .into_iter()
            .skip(1)
            .find(|&h| self.mesh.target(h) == target)
    }
}
