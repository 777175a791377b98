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
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{geometry::Point3, mesh::basic_types::Mesh, numeric::scalar::Scalar};

fn invalid_data<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, err)
}

pub fn write_obj<T: Scalar, P: AsRef<Path>>(mesh: &Mesh<T, 3>, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_obj_to(mesh, &mut out)?;
    out.flush()
}

/// Writes `v` lines for every vertex and one `f` line per face, polygons
/// included.
pub fn write_obj_to<T: Scalar, W: Write>(mesh: &Mesh<T, 3>, out: &mut W) -> io::Result<()> {
    for v in &mesh.vertices {
        let [x, y, z] = v.position.coords.map(|c| c.to_f64().unwrap_or(f64::NAN));
        writeln!(out, "v {:?} {:?} {:?}", x, y, z)?;
    }

    for f in mesh.face_indices() {
        write!(out, "f")?;
        for v in mesh.face_vertices(f) {
            // OBJ is 1-based
            write!(out, " {}", v + 1)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Read a mesh from a Wavefront OBJ file.
pub fn read_obj<T: Scalar, P: AsRef<Path>>(path: P) -> io::Result<Mesh<T, 3>> {
    let file = File::open(path)?;
    read_obj_from(BufReader::new(file))
}

/// Parses `v x y z` and `f i j k ...` lines; other records are ignored.
///
/// Face corners may carry `/vt/vn` suffixes, and negative indices count back
/// from the most recent vertex.
pub fn read_obj_from<T: Scalar, R: BufRead>(reader: R) -> io::Result<Mesh<T, 3>> {
    let mut mesh = Mesh::new();

    for (line_no, line) in reader.lines().enumerate() {
        let l = line?;
        let mut parts = l.split_whitespace();
        match parts.next() {
            Some("v") => {
                let mut xyz = [0.0f64; 3];
                for c in xyz.iter_mut() {
                    let token = parts.next().ok_or_else(|| {
                        invalid_data(format!("line {}: vertex needs 3 coordinates", line_no + 1))
                    })?;
                    *c = token.parse().map_err(|e| {
                        invalid_data(format!("line {}: bad coordinate {token:?}: {e}", line_no + 1))
                    })?;
                }
                mesh.add_vertex(Point3::<T>::from_vals(xyz));
            }
            Some("f") => {
                let mut corners = Vec::new();
                for token in parts {
                    let index = token.split('/').next().unwrap_or(token);
                    let index: i64 = index.parse().map_err(|e| {
                        invalid_data(format!("line {}: bad face index {token:?}: {e}", line_no + 1))
                    })?;
                    let resolved = match index {
                        i if i > 0 => (i - 1) as usize,
                        i if i < 0 => mesh
                            .vertices
                            .len()
                            .checked_sub(i.unsigned_abs() as usize)
                            .ok_or_else(|| {
                                invalid_data(format!(
                                    "line {}: relative index {i} out of range",
                                    line_no + 1
                                ))
                            })?,
                        _ => {
                            return Err(invalid_data(format!(
                                "line {}: face index 0 is not valid",
                                line_no + 1
                            )));
                        }
                    };
                    corners.push(resolved);
                }
                mesh.add_face(&corners).map_err(|e| {
                    invalid_data(format!("line {}: {e}", line_no + 1))
                })?;
            }
            _ => {
                // ignore comments, normals, etc.
            }
        }
    }

    mesh.build_boundary_loops();
    Ok(mesh)
}
