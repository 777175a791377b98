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

use surface_triangulation::geometry::{Point3, PointOps, Vector3, VectorOps};
use surface_triangulation::geometry::util::{max_angle_cosine, triangle_area_squared};
use surface_triangulation::mesh::{Mesh, MeshError};
use surface_triangulation::numeric::Scalar;

type T = f64;
const N: usize = 3;

fn quad_mesh() -> Mesh<T, N> {
    let mut mesh = Mesh::<T, N>::new();
    let v0 = mesh.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    let v1 = mesh.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    let v2 = mesh.add_vertex(Point3::from_vals([1.0, 1.0, 0.0]));
    let v3 = mesh.add_vertex(Point3::from_vals([0.0, 1.0, 0.0]));
    mesh.add_face(&[v0, v1, v2, v3]).unwrap();
    mesh.build_boundary_loops();
    mesh
}

#[test]
fn test_add_vertices_and_triangle_3() {
    let mut mesh = Mesh::<T, N>::new();

    let v0 = mesh.add_vertex(Point3::from_vals([0.0, 0.0, 0.0]));
    let v1 = mesh.add_vertex(Point3::from_vals([1.0, 0.0, 0.0]));
    let v2 = mesh.add_vertex(Point3::from_vals([0.0, 1.0, 0.0]));

    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(
        mesh.vertices[v1].position,
        Point3::from_vals([1.0, 0.0, 0.0])
    );

    let face_idx = mesh.add_triangle(v0, v1, v2).unwrap();
    assert_eq!(mesh.faces.len(), 1);
    // three interior half-edges plus their border twins
    assert_eq!(mesh.half_edges.len(), 6);

    let face = &mesh.faces[face_idx];
    let he0 = &mesh.half_edges[face.half_edge];
    let he1 = &mesh.half_edges[he0.next];
    let he2 = &mesh.half_edges[he1.next];

    // Check cycle
    assert_eq!(he2.next, face.half_edge); // closes the cycle
    assert_eq!(he0.vertex, v1);
    assert_eq!(he1.vertex, v2);
    assert_eq!(he2.vertex, v0);

    mesh.build_boundary_loops();
    mesh.validate_connectivity();
}

#[test]
fn test_shared_edge_is_reused() {
    let mut mesh = quad_mesh();
    let v4 = mesh.add_vertex(Point3::from_vals([2.0, 0.5, 0.0]));
    mesh.add_triangle(1, v4, 2).unwrap();
    mesh.build_boundary_loops();

    assert_eq!(mesh.faces.len(), 2);
    assert_eq!(mesh.edge_count(), 6);
    assert!(mesh.is_interior_edge(1, 2));
    assert!(!mesh.is_interior_edge(0, 1));
    assert!(!mesh.is_interior_edge(0, 2));
    mesh.validate_connectivity();
}

#[test]
fn test_add_face_rejects_bad_input() {
    let mut mesh = quad_mesh();
    let edges = mesh.half_edges.len();

    assert_eq!(mesh.add_face(&[0, 1]), Err(MeshError::DegenerateFace(2)));
    assert_eq!(mesh.add_face(&[0, 1, 9]), Err(MeshError::InvalidVertex(9)));
    assert_eq!(mesh.add_face(&[0, 2, 0]), Err(MeshError::RepeatedVertex(0)));
    // Same orientation as the quad on edge 0 -> 1.
    let v4 = mesh.add_vertex(Point3::from_vals([0.5, -1.0, 0.0]));
    assert_eq!(
        mesh.add_face(&[0, 1, v4]),
        Err(MeshError::NonManifoldEdge { from: 0, to: 1 })
    );

    assert_eq!(mesh.half_edges.len(), edges);
    assert_eq!(mesh.faces.len(), 1);
    mesh.validate_connectivity();
}

#[test]
fn test_face_walks() {
    let mesh = quad_mesh();
    assert_eq!(mesh.face_vertices(0).as_slice(), &[0, 1, 2, 3]);
    assert_eq!(mesh.face_degree(0), 4);

    let hs = mesh.face_half_edges(0);
    for (i, &h) in hs.iter().enumerate() {
        assert_eq!(mesh.source(h), i);
        assert_eq!(mesh.target(h), (i + 1) % 4);
        assert!(!mesh.is_boundary(h));
        assert!(mesh.is_boundary(mesh.twin(h)));
        assert_eq!(mesh.next(h), hs[(i + 1) % 4]);
    }
}

#[test]
fn test_border_loop_runs_against_the_face() {
    let mesh = quad_mesh();
    let border = mesh.half_edge_between(1, 0).unwrap();
    let walk: Vec<usize> = mesh
        .half_edge_loop(border)
        .iter()
        .map(|&h| mesh.target(h))
        .collect();
    assert_eq!(walk, vec![0, 3, 2, 1]);
}

#[test]
fn test_split_face() {
    let mut mesh = quad_mesh();
    let h0 = mesh.half_edge_between(3, 0).unwrap();
    let h1 = mesh.half_edge_between(1, 2).unwrap();

    let h4 = mesh.split_face(h0, h1).unwrap();
    assert_eq!(mesh.source(h4), 0);
    assert_eq!(mesh.target(h4), 2);
    assert_eq!(mesh.faces.len(), 2);
    assert_eq!(mesh.face_degree(0), 3);
    assert_eq!(mesh.face_degree(1), 3);
    assert_eq!(mesh.half_edges[h0].face, Some(0));
    assert_eq!(mesh.half_edges[h1].face, Some(1));
    assert!(mesh.is_interior_edge(0, 2));
    mesh.validate_connectivity();

    // h0 and h1 now sit on different faces.
    assert_eq!(mesh.split_face(h0, h1), None);
}

#[test]
fn test_split_face_rejects_adjacent_and_existing() {
    let mut mesh = quad_mesh();
    let h01 = mesh.half_edge_between(0, 1).unwrap();
    let h12 = mesh.half_edge_between(1, 2).unwrap();
    let h23 = mesh.half_edge_between(2, 3).unwrap();

    assert_eq!(mesh.split_face(h01, h12), None);
    assert_eq!(mesh.split_face(h12, h01), None);
    assert_eq!(mesh.split_face(h01, h01), None);

    assert!(mesh.split_face(h01, h23).is_some());
    assert_eq!(mesh.faces.len(), 2);
    assert!(mesh.are_vertices_connected(3, 1));
    mesh.validate_connectivity();
}

#[test]
fn test_split_face_rejects_other_faces() {
    let mut mesh = quad_mesh();
    let inner = mesh.half_edge_between(0, 1).unwrap();
    let border = mesh.half_edge_between(2, 1).unwrap();
    assert_eq!(mesh.split_face(inner, border), None);
    assert_eq!(mesh.split_face(border, inner), None);
    assert_eq!(mesh.faces.len(), 1);
}

#[test]
fn test_triangle_measures() {
    let a = Point3::<T>::from_vals([0.0, 0.0, 0.0]);
    let b = Point3::<T>::from_vals([2.0, 0.0, 0.0]);
    let c = Point3::<T>::from_vals([0.0, 2.0, 0.0]);
    assert_eq!(triangle_area_squared(&a, &b, &c), 4.0);
    // right isosceles: sharpest corner is 45 degrees
    assert!(max_angle_cosine(&a, &b, &c).approx_eq(&0.5f64.sqrt()));

    let v: Vector3<T> = a.vector_to(&b);
    assert_eq!(v.norm_squared(), 4.0);
    assert_eq!(v.normalized(), Vector3::from_vals([1.0, 0.0, 0.0]));
    assert_eq!(v[0], 2.0);
    assert_eq!(a.midpoint(&b), Point3::from_vals([1.0, 0.0, 0.0]));
    assert_eq!(c.midpoint(&b)[1], 1.0);
}
