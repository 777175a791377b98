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
    geometry::{
        util::{max_angle_cosine, triangle_area_vector},
        vector::VectorOps,
    },
    mesh::basic_types::Mesh,
    numeric::scalar::Scalar,
    operations::triangulation::{Objective, Polygon, ValidityGate},
};

/// Cost and split tables for one polygon, indexed by boundary positions.
///
/// Only entries with `start < end` are meaningful. `split(start, end)` is the
/// apex of the triangle standing on `start`–`end` in the optimal solution of
/// that sub-range, or `None` when the range is a single polygon edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangulationPlan<T: Scalar> {
    objective: Objective,
    n: usize,
    cost: Vec<T>,
    split: Vec<Option<usize>>,
}

impl<T: Scalar> TriangulationPlan<T> {
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn cost(&self, start: usize, end: usize) -> T {
        self.cost[start * self.n + end]
    }

    pub fn split(&self, start: usize, end: usize) -> Option<usize> {
        self.split[start * self.n + end]
    }

    /// Cost of triangulating the whole polygon.
    pub fn total_cost(&self) -> T {
        if self.n < 2 {
            return T::zero();
        }
        self.cost(0, self.n - 1)
    }

    /// Triangles of the optimal solution as boundary index triples
    /// `[start, split, end]`, in the order the commit visits them.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let mut triangles = Vec::with_capacity(self.n.saturating_sub(2));
        if self.n < 3 {
            return triangles;
        }
        let mut todo = vec![(0, self.n - 1)];
        while let Some((start, end)) = todo.pop() {
            if end - start < 2 {
                continue;
            }
            let Some(split) = self.split(start, end) else {
                continue;
            };
            triangles.push([start, split, end]);
            todo.push((start, split));
            todo.push((split, end));
        }
        triangles
    }

    /// Diagonals of the optimal solution as boundary index pairs.
    /// Polygon edges are never listed.
    pub fn diagonals(&self) -> Vec<(usize, usize)> {
        let mut diagonals = Vec::with_capacity(self.n.saturating_sub(3));
        for [start, split, end] in self.triangles() {
            if split - start >= 2 {
                diagonals.push((start, split));
            }
            if end - split >= 2 {
                diagonals.push((split, end));
            }
        }
        diagonals
    }
}

/// Interval dynamic program over one face boundary.
#[derive(Debug)]
pub struct CostPlanner<'a, T: Scalar> {
    mesh: &'a Mesh<T, 3>,
    polygon: &'a Polygon,
    objective: Objective,
    gate: ValidityGate,
}

impl<'a, T: Scalar> CostPlanner<'a, T> {
    pub fn new(mesh: &'a Mesh<T, 3>, polygon: &'a Polygon, objective: Objective) -> Self {
        Self {
            mesh,
            polygon,
            objective,
            gate: ValidityGate::default(),
        }
    }

    pub fn with_validity_gate(mut self, gate: ValidityGate) -> Self {
        self.gate = gate;
        self
    }

    /// Weight of the candidate triangle on boundary positions `(i, m, k)`.
    ///
    /// Forbidden triangles weigh `T::max_value()`. They can still be chosen
    /// when a range has no other candidate.
    pub fn weight(&self, i: usize, m: usize, k: usize) -> T {
        let a = self.polygon.vertex(i);
        let b = self.polygon.vertex(m);
        let c = self.polygon.vertex(k);

        if self.is_forbidden(a, b, c) {
            return T::max_value();
        }

        let pa = &self.mesh.vertices[a].position;
        let pb = &self.mesh.vertices[b].position;
        let pc = &self.mesh.vertices[c].position;

        match self.objective {
            Objective::MinArea => triangle_area_vector(pa, pb, pc).norm_squared(),
            Objective::MaxAngle => max_angle_cosine(pa, pb, pc),
        }
    }

    fn is_forbidden(&self, a: usize, b: usize, c: usize) -> bool {
        let mesh = self.mesh;
        match self.gate {
            ValidityGate::AllEdgesExist => {
                mesh.are_vertices_connected(a, b)
                    && mesh.are_vertices_connected(b, c)
                    && mesh.are_vertices_connected(c, a)
            }
            ValidityGate::AnyInteriorEdge => {
                mesh.is_interior_edge(a, b)
                    || mesh.is_interior_edge(b, c)
                    || mesh.is_interior_edge(c, a)
            }
        }
    }

    /// Cost of splitting a range into `left`, the new triangle, and `right`.
    #[inline]
    fn combine(&self, left: T, triangle: T, right: T) -> T {
        match self.objective {
            Objective::MinArea => left + triangle + right,
            Objective::MaxAngle => left.max(triangle.max(right)),
        }
    }

    pub fn plan(&self) -> TriangulationPlan<T> {
        let n = self.polygon.len();
        let mut cost = vec![T::max_value(); n * n];
        let mut split = vec![None; n * n];

        // 2-gons: polygon edges, no triangle
        for i in 0..n.saturating_sub(1) {
            cost[i * n + i + 1] = T::zero();
        }

        // n-gons with n > 2, by increasing span
        for j in 2..n {
            for i in 0..n - j {
                let k = i + j;
                let mut best: Option<(usize, T)> = None;

                // Scan splits in increasing order; only a strictly smaller
                // cost replaces the incumbent, so ties keep the lowest m.
                for m in i + 1..k {
                    let w = self.combine(cost[i * n + m], self.weight(i, m, k), cost[m * n + k]);
                    match best {
                        Some((_, w_best)) if !(w < w_best) => {}
                        _ => best = Some((m, w)),
                    }
                }

                if let Some((m, w)) = best {
                    cost[i * n + k] = w;
                    split[i * n + k] = Some(m);
                }
            }
        }

        let plan = TriangulationPlan {
            objective: self.objective,
            n,
            cost,
            split,
        };
        log::trace!(
            "planned face {} ({} sides, {}): cost {:?}",
            self.polygon.face(),
            n,
            self.objective,
            plan.total_cost()
        );
        plan
    }
}
