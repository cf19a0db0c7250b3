use std::fmt;

use strata_blocks::{BLOCK_KIND_COUNT, BlockKind};
use strata_chunk::ChunkVolume;
use strata_geom::{Aabb, ChunkPos};
use strata_mesh_cpu::MeshBuffers;

/// Summary of one generated and meshed chunk.
#[derive(Clone, Debug)]
pub struct ChunkReport {
    pub origin: ChunkPos,
    pub histogram: [usize; BLOCK_KIND_COUNT],
    pub faces: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub surface_min: i32,
    pub surface_max: i32,
    pub bounds: Option<Aabb>,
}

impl ChunkReport {
    pub fn new(volume: &ChunkVolume, mesh: &MeshBuffers) -> Self {
        let size = volume.size();
        let heights = (0..size)
            .flat_map(|x| (0..size).filter_map(move |z| volume.surface_height(x, z)));
        let (surface_min, surface_max) =
            heights.fold((i32::MAX, i32::MIN), |(lo, hi), h| (lo.min(h), hi.max(h)));
        Self {
            origin: volume.origin(),
            histogram: volume.histogram(),
            faces: mesh.face_count(),
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            surface_min,
            surface_max,
            bounds: mesh.bounds(),
        }
    }
}

impl fmt::Display for ChunkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "chunk ({}, {}): surface {}..={}, {} faces, {} vertices, {} triangles",
            self.origin.cx,
            self.origin.cz,
            self.surface_min,
            self.surface_max,
            self.faces,
            self.vertices,
            self.triangles
        )?;
        if let Some(bb) = self.bounds {
            writeln!(
                f,
                "  bounds ({}, {}, {}) .. ({}, {}, {})",
                bb.min.x, bb.min.y, bb.min.z, bb.max.x, bb.max.y, bb.max.z
            )?;
        }
        for kind in BlockKind::ALL {
            let n = self.histogram[kind.index()];
            if n > 0 {
                writeln!(f, "  {:<16} {n}", kind.name())?;
            }
        }
        Ok(())
    }
}

/// Running totals across every reported chunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub chunks: usize,
    pub faces: usize,
    pub vertices: usize,
    pub triangles: usize,
    pub ore_cells: usize,
}

impl Totals {
    pub fn add(&mut self, r: &ChunkReport) {
        self.chunks += 1;
        self.faces += r.faces;
        self.vertices += r.vertices;
        self.triangles += r.triangles;
        self.ore_cells += BlockKind::ALL
            .iter()
            .filter(|k| k.is_ore())
            .map(|k| r.histogram[k.index()])
            .sum::<usize>();
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {} chunks, {} faces, {} vertices, {} triangles, {} ore cells",
            self.chunks, self.faces, self.vertices, self.triangles, self.ore_cells
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_chunk::generate_chunk;
    use strata_mesh_cpu::build_mesh;
    use strata_world::{WorldGenConfig, WorldGenParams};

    #[test]
    fn report_of_flat_chunk() {
        let mut cfg = WorldGenConfig::default();
        cfg.chunk.size = 4;
        cfg.chunk.height = 8;
        cfg.height.ground_level = 4;
        cfg.height.height_variation = 0;
        cfg.water.level = 2;
        let p = WorldGenParams::from_config(&cfg).unwrap();
        let v = generate_chunk(ChunkPos::new(0, 0), &p).unwrap();
        let r = ChunkReport::new(&v, &build_mesh(&v));
        assert_eq!((r.surface_min, r.surface_max), (4, 4));
        assert_eq!(r.histogram[BlockKind::SurfaceCover.index()], 16);
        assert_eq!(r.faces, 96);
        let text = r.to_string();
        assert!(text.contains("surface_cover"));
        assert!(!text.contains("liquid"));

        let mut t = Totals::default();
        t.add(&r);
        t.add(&r);
        assert_eq!(t.chunks, 2);
        assert_eq!(t.faces, 192);
        assert_eq!(t.triangles, 2 * r.triangles);
    }
}
