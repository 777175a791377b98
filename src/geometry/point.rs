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

use std::{
    array,
    ops::{Index, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    fn vector_to(&self, other: &Self) -> Vector<T, N>;
    fn midpoint(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    /// Builds a point from anything losslessly convertible to `f64`, which
    /// keeps literals like `[0, 1, 0]` or `[0.5, 0.0, 2.0]` short in callers.
    pub fn from_vals<V: Into<f64>>(vals: [V; N]) -> Self {
        Self {
            coords: vals.map(|v| T::from_f64(v.into())),
        }
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        other - self
    }

    fn midpoint(&self, other: &Self) -> Self {
        let half = T::from_f64(0.5);
        Point {
            coords: array::from_fn(|i| (self.coords[i] + other.coords[i]) * half),
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

/// The difference of two points is the vector between them.
impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        Vector {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}
