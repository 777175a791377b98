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
        point::Point,
        vector::{Cross3, Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

pub const EPS: f64 = 1e-10;

/// Twice the area vector of triangle `(a, b, c)`, as `(b - a) × (c - a)`.
pub fn triangle_area_vector<T: Scalar>(
    a: &Point<T, 3>,
    b: &Point<T, 3>,
    c: &Point<T, 3>,
) -> Vector<T, 3> {
    (b - a).cross(&(c - a))
}

/// Squared area of triangle `(a, b, c)`.
pub fn triangle_area_squared<T: Scalar>(a: &Point<T, 3>, b: &Point<T, 3>, c: &Point<T, 3>) -> T {
    let quarter = T::from_f64(0.25);
    triangle_area_vector(a, b, c).norm_squared() * quarter
}

/// Largest interior-angle cosine of triangle `(a, b, c)`.
///
/// The largest cosine belongs to the sharpest corner, so minimizing this value
/// maximizes the smallest angle.
pub fn max_angle_cosine<T: Scalar>(a: &Point<T, 3>, b: &Point<T, 3>, c: &Point<T, 3>) -> T {
    let cos_a = (b - a).normalized().dot(&(c - a).normalized());
    let cos_b = (a - b).normalized().dot(&(c - b).normalized());
    let cos_c = (a - c).normalized().dot(&(b - c).normalized());
    cos_a.max(cos_b.max(cos_c))
}
