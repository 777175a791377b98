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

use crate::numeric::scalar::Scalar;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm_squared(&self) -> T;
    fn norm(&self) -> T;
    fn normalized(&self) -> Self;
}

pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Self { coords }
    }

    pub fn from_vals<V: Into<f64>>(vals: [V; N]) -> Self {
        Self {
            coords: vals.map(|v| T::from_f64(v.into())),
        }
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Zero-length vectors come back as NaN components, like a plain division.
    fn normalized(&self) -> Self {
        let n = self.norm();
        Self {
            coords: array::from_fn(|i| self.coords[i] / n),
        }
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Vector {
            coords: [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Vector<T, N>> for &'a Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: &'b Vector<T, N>) -> Self::Output {
        Vector {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}
