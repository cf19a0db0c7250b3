use std::fmt;

use strata_geom::{Aabb, Vec3};

use crate::face::Face;

/// Broken invariant found by [`MeshBuffers::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshDefect {
    RaggedIndices { len: usize },
    IndexOutOfRange { at: usize, index: u32, vertices: usize },
    ColorCount { colors: usize, vertices: usize },
    NormalCount { normals: usize, vertices: usize },
}

impl fmt::Display for MeshDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshDefect::RaggedIndices { len } => {
                write!(f, "index count {len} is not a multiple of 3")
            }
            MeshDefect::IndexOutOfRange { at, index, vertices } => {
                write!(f, "index {index} at {at} exceeds {vertices} vertices")
            }
            MeshDefect::ColorCount { colors, vertices } => {
                write!(f, "{colors} colors for {vertices} vertices")
            }
            MeshDefect::NormalCount { normals, vertices } => {
                write!(f, "{normals} normals for {vertices} vertices")
            }
        }
    }
}

impl std::error::Error for MeshDefect {}

/// Vertex, triangle and per-vertex color buffers for one chunk.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
    pub colors: Vec<[u8; 4]>,
    /// Filled by [`MeshBuffers::finalize`]; empty before that.
    pub normals: Vec<Vec3>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.positions.reserve(n_quads * 4);
        self.colors.reserve(n_quads * 4);
        self.indices.reserve(n_quads * 6);
    }

    /// Appends one unit face of the cell at `origin` as two triangles.
    pub fn add_face(&mut self, face: Face, origin: Vec3, rgba: [u8; 4]) {
        let base = self.positions.len() as u32;
        for corner in face.corners() {
            self.positions.push(origin + Vec3::from(corner));
            self.colors.push(rgba);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Derives per-vertex normals by area-weighted accumulation over the
    /// triangle list. Vertices referenced by no triangle get a zero normal.
    pub fn finalize(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (pa, pb, pc) = (self.positions[a], self.positions[b], self.positions[c]);
            // Unnormalized cross product: length is twice the triangle area.
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc.into_iter().map(Vec3::normalized).collect();
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of emitted quads; every face owns four vertices.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 4
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// Copy with every vertex shifted by `offset`; indices, colors and
    /// normals are unchanged.
    pub fn translated(&self, offset: Vec3) -> MeshBuffers {
        MeshBuffers {
            positions: self.positions.iter().map(|p| *p + offset).collect(),
            indices: self.indices.clone(),
            colors: self.colors.clone(),
            normals: self.normals.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), MeshDefect> {
        let vertices = self.positions.len();
        if self.indices.len() % 3 != 0 {
            return Err(MeshDefect::RaggedIndices {
                len: self.indices.len(),
            });
        }
        if let Some((at, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= vertices)
        {
            return Err(MeshDefect::IndexOutOfRange {
                at,
                index,
                vertices,
            });
        }
        if self.colors.len() != vertices {
            return Err(MeshDefect::ColorCount {
                colors: self.colors.len(),
                vertices,
            });
        }
        if !self.normals.is_empty() && self.normals.len() != vertices {
            return Err(MeshDefect::NormalCount {
                normals: self.normals.len(),
                vertices,
            });
        }
        Ok(())
    }
}
