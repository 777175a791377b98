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

use surface_triangulation::geometry::Point3;
use surface_triangulation::mesh::Mesh;

type T = f64;

/// Four triangles fanned around vertex 0, closing into a disk.
fn closed_fan() -> Mesh<T, 3> {
    Mesh::<T, 3>::from_polygons(
        [
            Point3::from_vals([0.0, 0.0, 0.0]),
            Point3::from_vals([1.0, 0.0, 0.0]),
            Point3::from_vals([0.0, 1.0, 0.0]),
            Point3::from_vals([-1.0, 0.0, 0.0]),
            Point3::from_vals([0.0, -1.0, 0.0]),
        ],
        [[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]],
    )
    .unwrap()
}

/// Two triangles touching only at vertex 0.
fn bowtie() -> Mesh<T, 3> {
    Mesh::<T, 3>::from_polygons(
        [
            Point3::from_vals([0.0, 0.0, 0.0]),
            Point3::from_vals([1.0, 0.0, 0.0]),
            Point3::from_vals([1.0, 1.0, 0.0]),
            Point3::from_vals([-1.0, 0.0, 0.0]),
            Point3::from_vals([-1.0, -1.0, 0.0]),
        ],
        [[0, 1, 2], [0, 3, 4]],
    )
    .unwrap()
}

#[test]
fn test_interior_vertex_of_closed_fan() {
    let mesh = closed_fan();
    mesh.validate_connectivity();

    assert!(mesh.is_manifold(0));
    assert!(!mesh.is_boundary_vertex(0));

    let mut ring = mesh.one_ring_neighbors(0);
    ring.sort_unstable();
    assert_eq!(ring, vec![1, 2, 3, 4]);
    assert_eq!(mesh.outgoing_half_edges(0).len(), 4);

    for v in 1..=4 {
        assert!(mesh.is_manifold(v));
        assert!(mesh.is_boundary_vertex(v));
        assert!(mesh.is_interior_edge(0, v));
        assert!(mesh.is_interior_edge(v, 0));
    }
    assert!(!mesh.is_interior_edge(1, 2));
    assert!(!mesh.is_interior_edge(1, 3));
}

#[test]
fn test_boundary_vertex_rotation_reaches_every_spoke() {
    let mesh = closed_fan();
    // vertex 1 touches two faces and two border edges
    let mut ring = mesh.one_ring_neighbors(1);
    ring.sort_unstable();
    assert_eq!(ring, vec![0, 2, 4]);

    let borders = mesh
        .outgoing_half_edges(1)
        .into_iter()
        .filter(|&h| mesh.is_boundary(h))
        .count();
    assert_eq!(borders, 1);
}

#[test]
fn test_bowtie_apex_is_not_manifold() {
    let mesh = bowtie();
    mesh.validate_connectivity();

    assert!(!mesh.is_manifold(0));
    assert!(mesh.outgoing_half_edges(0).len() < 4);
    for v in 1..=4 {
        assert!(mesh.is_manifold(v));
    }
}

#[test]
fn test_isolated_vertex_is_manifold() {
    let mut mesh = closed_fan();
    let v = mesh.add_vertex(Point3::from_vals([5.0, 5.0, 5.0]));
    assert!(mesh.vertices[v].is_isolated());
    assert!(mesh.is_manifold(v));
    assert!(mesh.outgoing_half_edges(v).is_empty());
    assert!(!mesh.is_boundary_vertex(v));
}

#[test]
fn test_edge_queries() {
    let mesh = closed_fan();
    assert_eq!(mesh.edge_count(), 8);

    let h = mesh.half_edge_between(0, 1).unwrap();
    assert_eq!(mesh.source(h), 0);
    assert_eq!(mesh.target(h), 1);
    assert_eq!(mesh.half_edge_between(1, 0), Some(mesh.twin(h)));

    assert!(mesh.are_vertices_connected(2, 1));
    assert!(!mesh.are_vertices_connected(1, 3));
    assert_eq!(mesh.half_edge_between(1, 3), None);
}

#[test]
fn test_boundary_loops_follow_new_faces() {
    let mut mesh = closed_fan();
    let v5 = mesh.add_vertex(Point3::from_vals([1.0, 1.0, 0.0]));
    mesh.add_triangle(1, v5, 2).unwrap();
    mesh.ensure_boundary_loops();
    mesh.validate_connectivity();

    assert!(mesh.is_interior_edge(1, 2));
    // outer border: 1 -> 4 -> 3 -> 2 -> 5 -> 1
    let start = mesh.half_edge_between(1, 4).unwrap();
    let loop_len = mesh.half_edge_loop(start).len();
    assert_eq!(loop_len, 5);
}
