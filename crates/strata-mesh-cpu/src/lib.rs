//! CPU meshing crate: visibility-culled cube faces for one chunk.
#![forbid(unsafe_code)]

use std::time::Instant;

use strata_blocks::material;
use strata_chunk::ChunkVolume;
use strata_geom::Vec3;

mod face;
mod mesh_build;

pub use face::Face;
pub use mesh_build::{MeshBuffers, MeshDefect};

/// Builds the chunk mesh in local block coordinates.
///
/// Every non-void cell emits one quad per face whose neighbour is void or
/// outside the volume. Chunk borders are therefore always closed, even where
/// a neighbouring chunk would hide them. Faces are not merged and vertices
/// are not shared between faces.
pub fn build_mesh(volume: &ChunkVolume) -> MeshBuffers {
    let start = Instant::now();
    let mut mb = MeshBuffers::new();
    // One exposed face per non-void cell is typical for terrain.
    mb.reserve_quads(volume.blocks().iter().filter(|b| !b.is_void()).count());
    for (x, y, z, kind) in volume.iter() {
        if kind.is_void() {
            continue;
        }
        let (ix, iy, iz) = (x as i32, y as i32, z as i32);
        let rgba = material(kind).rgba8();
        let origin = Vec3::new(x as f32, y as f32, z as f32);
        for face in Face::ALL {
            let (dx, dy, dz) = face.delta();
            if volume.is_transparent(ix + dx, iy + dy, iz + dz) {
                mb.add_face(face, origin, rgba);
            }
        }
    }
    mb.finalize();
    log::debug!(
        "meshed chunk ({}, {}): {} faces, {} vertices in {:?}",
        volume.origin().cx,
        volume.origin().cz,
        mb.face_count(),
        mb.vertex_count(),
        start.elapsed()
    );
    mb
}

/// Same as [`build_mesh`] with vertices placed at the chunk's world offset.
pub fn build_mesh_world(volume: &ChunkVolume) -> MeshBuffers {
    let (wx, wz) = volume.world_origin();
    build_mesh(volume).translated(Vec3::new(wx as f32, 0.0, wz as f32))
}
