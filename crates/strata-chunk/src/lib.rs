//! Chunk volume storage and one-shot population.
#![forbid(unsafe_code)]

use std::time::Instant;

use strata_blocks::{BLOCK_KIND_COUNT, BlockKind};
use strata_geom::ChunkPos;
use strata_world::{
    ConfigError, TerrainSamplers, WorldGenConfig, WorldGenParams, checked_volume_len,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("chunk ({cx}, {cz}) is already populated")]
    AlreadyPopulated { cx: i32, cz: i32 },

    #[error("volume is {got_size}x{got_height}x{got_size} but params expect {size}x{height}x{size}")]
    DimensionMismatch {
        size: usize,
        height: usize,
        got_size: usize,
        got_height: usize,
    },

    #[error("block buffer has {got} cells, expected {expect}")]
    BufferLength { expect: usize, got: usize },

    #[error("{size}x{height}x{size} is not a usable volume size")]
    InvalidDimensions { size: usize, height: usize },

    #[error("chunk ({cx}, {cz}) of width {size} lies outside the i32 world")]
    OriginOutOfRange { cx: i32, cz: i32, size: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkState {
    Empty,
    Populated,
}

/// Dense `size × height × size` block array for one chunk.
#[derive(Clone, Debug)]
pub struct ChunkVolume {
    origin: ChunkPos,
    size: usize,
    height: usize,
    blocks: Vec<BlockKind>,
    surface: Vec<i32>,
    state: ChunkState,
}

impl ChunkVolume {
    /// Unpopulated volume; every cell reads as `Void`.
    pub fn empty(origin: ChunkPos, params: &WorldGenParams) -> Result<Self, GenerateError> {
        let (size, height) = (params.chunk_size, params.chunk_height);
        let len = check_shape(origin, size, height)?;
        Ok(Self {
            origin,
            size,
            height,
            blocks: vec![BlockKind::Void; len],
            surface: vec![0; size * size],
            state: ChunkState::Empty,
        })
    }

    /// Wraps an existing buffer laid out by [`ChunkVolume::idx`]. The result
    /// counts as populated; surface heights are unknown (reported as 0).
    pub fn from_blocks(
        origin: ChunkPos,
        size: usize,
        height: usize,
        blocks: Vec<BlockKind>,
    ) -> Result<Self, GenerateError> {
        let expect = check_shape(origin, size, height)?;
        if blocks.len() != expect {
            return Err(GenerateError::BufferLength {
                expect,
                got: blocks.len(),
            });
        }
        Ok(Self {
            origin,
            size,
            height,
            blocks,
            surface: vec![0; size * size],
            state: ChunkState::Populated,
        })
    }

    #[inline]
    pub fn origin(&self) -> ChunkPos {
        self.origin
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn state(&self) -> ChunkState {
        self.state
    }

    #[inline]
    pub fn is_populated(&self) -> bool {
        self.state == ChunkState::Populated
    }

    /// World block coordinates of local `(0, 0, 0)`.
    #[inline]
    pub fn world_origin(&self) -> (i32, i32) {
        self.origin.block_origin(self.size)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.size * (y + self.height * z)
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.size
            && (y as usize) < self.height
            && (z as usize) < self.size
    }

    /// Block at local `(x, y, z)`, or `None` outside the volume.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<BlockKind> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(self.blocks[self.idx(x as usize, y as usize, z as usize)])
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> BlockKind {
        self.blocks[self.idx(x, y, z)]
    }

    /// Out-of-bounds cells count as transparent; there is no neighbour lookup.
    #[inline]
    pub fn is_transparent(&self, x: i32, y: i32, z: i32) -> bool {
        self.get(x, y, z).is_none_or(BlockKind::is_void)
    }

    /// Surface height recorded for local column `(x, z)` during population.
    pub fn surface_height(&self, x: usize, z: usize) -> Option<i32> {
        if x >= self.size || z >= self.size {
            return None;
        }
        Some(self.surface[x + self.size * z])
    }

    pub fn blocks(&self) -> &[BlockKind] {
        &self.blocks
    }

    /// All cells in `(x, y, z)` raster order, x outermost.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize, BlockKind)> + '_ {
        let (sx, sy, sz) = (self.size, self.height, self.size);
        (0..sx).flat_map(move |x| {
            (0..sy).flat_map(move |y| (0..sz).map(move |z| (x, y, z, self.get_local(x, y, z))))
        })
    }

    /// Cell counts indexed by [`BlockKind::index`].
    pub fn histogram(&self) -> [usize; BLOCK_KIND_COUNT] {
        let mut counts = [0usize; BLOCK_KIND_COUNT];
        for b in &self.blocks {
            counts[b.index()] += 1;
        }
        counts
    }

    #[inline]
    pub fn has_non_void(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_void())
    }
}

// Cell count of a chunk at `origin`. Its mesh must be u32-indexable and its
// columns must have i32 world coordinates.
fn check_shape(origin: ChunkPos, size: usize, height: usize) -> Result<usize, GenerateError> {
    let len = checked_volume_len(size, height)
        .filter(|_| size > 0 && height > 0)
        .ok_or(GenerateError::InvalidDimensions { size, height })?;
    if origin.checked_block_origin(size).is_none() {
        return Err(GenerateError::OriginOutOfRange {
            cx: origin.cx,
            cz: origin.cz,
            size,
        });
    }
    Ok(len)
}

/// Populates `volume` exactly once. Fails without touching the volume if it
/// is already populated or was sized for different params.
pub fn generate(volume: &mut ChunkVolume, params: &WorldGenParams) -> Result<(), GenerateError> {
    if volume.is_populated() {
        return Err(GenerateError::AlreadyPopulated {
            cx: volume.origin.cx,
            cz: volume.origin.cz,
        });
    }
    if volume.size != params.chunk_size || volume.height != params.chunk_height {
        return Err(GenerateError::DimensionMismatch {
            size: params.chunk_size,
            height: params.chunk_height,
            got_size: volume.size,
            got_height: volume.height,
        });
    }
    populate(volume, params);
    Ok(())
}

fn populate(volume: &mut ChunkVolume, params: &WorldGenParams) {
    let start = Instant::now();
    let samplers = TerrainSamplers::new(params);
    let (size, height) = (volume.size, volume.height);
    for x in 0..size {
        for z in 0..size {
            let (wx, wz) = volume.origin.world_column(size, x, z);
            let surface = samplers.height.height_at(wx, wz);
            log::trace!("column ({wx}, {wz}) surface={surface}");
            volume.surface[x + size * z] = surface;
            for y in 0..height {
                let i = volume.idx(x, y, z);
                volume.blocks[i] = samplers.block_at(wx, y as i32, wz, surface);
            }
        }
    }
    volume.state = ChunkState::Populated;

    log::debug!(
        "generated chunk ({}, {}) {}x{}x{} solid={} in {:?}",
        volume.origin.cx,
        volume.origin.cz,
        size,
        height,
        size,
        volume.blocks.iter().filter(|b| b.is_solid()).count(),
        start.elapsed()
    );
}

/// Allocates and populates the chunk at `origin`. Fails when the chunk's
/// world columns do not fit in `i32`.
pub fn generate_chunk(
    origin: ChunkPos,
    params: &WorldGenParams,
) -> Result<ChunkVolume, GenerateError> {
    let mut volume = ChunkVolume::empty(origin, params)?;
    populate(&mut volume, params);
    Ok(volume)
}

/// Validates `cfg` and generates the chunk at `origin`.
pub fn generate_chunk_from_config(
    origin: ChunkPos,
    cfg: &WorldGenConfig,
) -> Result<ChunkVolume, GenerateError> {
    let params = WorldGenParams::from_config(cfg)?;
    generate_chunk(origin, &params)
}
