use std::fs;
use std::path::Path;

use serde::Deserialize;
use strata_blocks::BlockKind;

use crate::error::ConfigError;
use crate::ores::OreBand;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default)]
    pub chunk: Chunk,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub water: Water,
    #[serde(default)]
    pub caves: Caves,
    #[serde(default)]
    pub ores: Ores,
}

fn default_seed() -> i32 {
    1337
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            chunk: Chunk::default(),
            height: Height::default(),
            water: Water::default(),
            caves: Caves::default(),
            ores: Ores::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Chunk {
    #[serde(default = "default_chunk_size")]
    pub size: i32,
    #[serde(default = "default_chunk_height")]
    pub height: i32,
}
fn default_chunk_size() -> i32 {
    16
}
fn default_chunk_height() -> i32 {
    64
}
impl Default for Chunk {
    fn default() -> Self {
        Self {
            size: default_chunk_size(),
            height: default_chunk_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f32,
    #[serde(default = "default_octaves")]
    pub octaves: i32,
    #[serde(default = "default_persistence")]
    pub persistence: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    /// Step frequency by `lacunarity` instead of `persistence`.
    #[serde(default)]
    pub lacunarity_fix: bool,
    #[serde(default = "default_ground_level")]
    pub ground_level: i32,
    #[serde(default = "default_height_variation")]
    pub height_variation: i32,
}
fn default_noise_scale() -> f32 {
    0.1
}
fn default_octaves() -> i32 {
    3
}
fn default_persistence() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}
fn default_ground_level() -> i32 {
    32
}
fn default_height_variation() -> i32 {
    16
}
impl Default for Height {
    fn default() -> Self {
        Self {
            noise_scale: default_noise_scale(),
            octaves: default_octaves(),
            persistence: default_persistence(),
            lacunarity: default_lacunarity(),
            lacunarity_fix: false,
            ground_level: default_ground_level(),
            height_variation: default_height_variation(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Water {
    #[serde(default = "default_water_level")]
    pub level: i32,
}
fn default_water_level() -> i32 {
    28
}
impl Default for Water {
    fn default() -> Self {
        Self {
            level: default_water_level(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Caves {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default = "default_cave_scale")]
    pub scale: f32,
    /// Multiplier on `scale` for the vertical axis.
    #[serde(default = "default_vertical_squash")]
    pub vertical_squash: f32,
    #[serde(default = "default_cave_threshold")]
    pub threshold: f32,
    /// Caves only open strictly above this y.
    #[serde(default = "default_floor_y")]
    pub floor_y: i32,
    #[serde(default = "default_offset_xy")]
    pub offset_xy: f32,
    #[serde(default = "default_offset_yz")]
    pub offset_yz: f32,
}
fn default_true() -> bool {
    true
}
fn default_cave_scale() -> f32 {
    0.05
}
fn default_vertical_squash() -> f32 {
    0.5
}
fn default_cave_threshold() -> f32 {
    0.55
}
fn default_floor_y() -> i32 {
    5
}
fn default_offset_xy() -> f32 {
    100.0
}
fn default_offset_yz() -> f32 {
    200.0
}
impl Default for Caves {
    fn default() -> Self {
        Self {
            enable: true,
            scale: default_cave_scale(),
            vertical_squash: default_vertical_squash(),
            threshold: default_cave_threshold(),
            floor_y: default_floor_y(),
            offset_xy: default_offset_xy(),
            offset_yz: default_offset_yz(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Ores {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default = "default_ore_scale")]
    pub scale: f32,
    #[serde(default = "default_ore_offset")]
    pub offset: f32,
    #[serde(default = "default_ore_bands")]
    pub bands: Vec<OreBand>,
}
fn default_ore_scale() -> f32 {
    0.1
}
fn default_ore_offset() -> f32 {
    500.0
}
fn default_ore_bands() -> Vec<OreBand> {
    vec![
        OreBand::new(BlockKind::OreGem, Some(10), 0.95),
        OreBand::new(BlockKind::OreGold, Some(20), 0.92),
        OreBand::new(BlockKind::OreIron, Some(35), 0.85),
        OreBand::new(BlockKind::OreCoal, None, 0.75),
    ]
}
impl Default for Ores {
    fn default() -> Self {
        Self {
            enable: true,
            scale: default_ore_scale(),
            offset: default_ore_offset(),
            bands: default_ore_bands(),
        }
    }
}

// Flattened, validated snapshot used in tight loops
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub seed: i32,
    pub chunk_size: usize,
    pub chunk_height: usize,
    pub noise_scale: f32,
    pub octaves: u32,
    pub persistence: f32,
    pub lacunarity: f32,
    /// Per-octave frequency multiplier actually applied.
    pub frequency_step: f32,
    pub ground_level: i32,
    pub height_variation: i32,
    pub water_level: i32,
    pub caves_enable: bool,
    pub cave_scale: f32,
    pub cave_vertical_squash: f32,
    pub cave_threshold: f32,
    pub cave_floor_y: i32,
    pub cave_offset_xy: f32,
    pub cave_offset_yz: f32,
    pub ores_enable: bool,
    pub ore_scale: f32,
    pub ore_offset: f32,
    /// Sorted deepest band first; bands without a depth limit last.
    pub ore_bands: Vec<OreBand>,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
            .expect("default world config is valid")
    }
}

// Six faces of four vertices; meshes index vertices with u32.
const MAX_VERTICES_PER_CELL: usize = 24;

/// Cell count of a `size × height × size` volume, or `None` when it
/// overflows or a worst-case mesh of it could not be indexed with `u32`.
pub fn checked_volume_len(size: usize, height: usize) -> Option<usize> {
    let cells = size.checked_mul(height)?.checked_mul(size)?;
    let vertices = cells.checked_mul(MAX_VERTICES_PER_CELL)?;
    (u32::try_from(vertices).is_ok()).then_some(cells)
}

fn require_finite(field: &'static str, v: f32) -> Result<f32, ConfigError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::invalid(field, format!("{v} is not finite")))
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Result<Self, ConfigError> {
        if cfg.chunk.size <= 0 {
            return Err(ConfigError::invalid(
                "chunk.size",
                format!("must be positive, got {}", cfg.chunk.size),
            ));
        }
        if cfg.chunk.height < 2 {
            return Err(ConfigError::invalid(
                "chunk.height",
                format!("must be at least 2, got {}", cfg.chunk.height),
            ));
        }
        if checked_volume_len(cfg.chunk.size as usize, cfg.chunk.height as usize).is_none() {
            return Err(ConfigError::invalid(
                "chunk",
                format!(
                    "{}x{}x{} chunk is too large to generate and mesh",
                    cfg.chunk.size, cfg.chunk.height, cfg.chunk.size
                ),
            ));
        }
        if cfg.height.octaves <= 0 {
            return Err(ConfigError::invalid(
                "height.octaves",
                format!("must be positive, got {}", cfg.height.octaves),
            ));
        }
        let persistence = require_finite("height.persistence", cfg.height.persistence)?;
        let lacunarity = require_finite("height.lacunarity", cfg.height.lacunarity)?;

        let mut ore_bands = cfg.ores.bands.clone();
        for band in &ore_bands {
            require_finite("ores.bands.threshold", band.threshold)?;
            if !band.kind.is_solid() {
                return Err(ConfigError::invalid(
                    "ores.bands.kind",
                    format!("{} is not a solid block", band.kind.name()),
                ));
            }
        }
        // Stable: equal depth limits keep their configured order.
        ore_bands.sort_by_key(|b| b.max_y.unwrap_or(i32::MAX));

        Ok(Self {
            seed: cfg.seed,
            chunk_size: cfg.chunk.size as usize,
            chunk_height: cfg.chunk.height as usize,
            noise_scale: require_finite("height.noise_scale", cfg.height.noise_scale)?,
            octaves: cfg.height.octaves as u32,
            persistence,
            lacunarity,
            frequency_step: if cfg.height.lacunarity_fix {
                lacunarity
            } else {
                persistence
            },
            ground_level: cfg.height.ground_level,
            height_variation: cfg.height.height_variation,
            water_level: cfg.water.level,
            caves_enable: cfg.caves.enable,
            cave_scale: require_finite("caves.scale", cfg.caves.scale)?,
            cave_vertical_squash: require_finite(
                "caves.vertical_squash",
                cfg.caves.vertical_squash,
            )?,
            cave_threshold: require_finite("caves.threshold", cfg.caves.threshold)?,
            cave_floor_y: cfg.caves.floor_y,
            cave_offset_xy: require_finite("caves.offset_xy", cfg.caves.offset_xy)?,
            cave_offset_yz: require_finite("caves.offset_yz", cfg.caves.offset_yz)?,
            ores_enable: cfg.ores.enable,
            ore_scale: require_finite("ores.scale", cfg.ores.scale)?,
            ore_offset: require_finite("ores.offset", cfg.ores.offset)?,
            ore_bands,
        })
    }

    #[inline]
    pub fn volume_len(&self) -> usize {
        self.chunk_size * self.chunk_height * self.chunk_size
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldGenConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = WorldGenConfig::from_toml_str(&s)?;
    log::info!(
        "loaded world config from {} (seed {}, chunk {}x{}x{})",
        path.display(),
        cfg.seed,
        cfg.chunk.size,
        cfg.chunk.height,
        cfg.chunk.size
    );
    Ok(cfg)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, ConfigError> {
    WorldGenParams::from_config(&load_config_from_path(path)?)
}
