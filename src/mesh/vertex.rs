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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar, const N: usize> {
    pub position: Point<T, N>,
    /// An outgoing half-edge, if the vertex is referenced by any face.
    pub half_edge: Option<usize>,
    /// Number of half-edges leaving this vertex, border ones included.
    pub out_degree: usize,
}

impl<T: Scalar, const N: usize> Vertex<T, N> {
    pub fn new(position: Point<T, N>) -> Self {
        Self {
            position,
            half_edge: None,
            out_degree: 0,
        }
    }

    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.half_edge.is_none()
    }
}
