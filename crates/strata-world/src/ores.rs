use serde::Deserialize;
use strata_blocks::BlockKind;

use crate::noise::NoiseField;
use crate::worldgen::WorldGenParams;

/// One depth-limited mineral rule: `kind` is chosen when `y < max_y` (or at
/// any depth when `max_y` is absent) and the ore noise exceeds `threshold`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OreBand {
    pub kind: BlockKind,
    #[serde(default)]
    pub max_y: Option<i32>,
    pub threshold: f32,
}

impl OreBand {
    pub const fn new(kind: BlockKind, max_y: Option<i32>, threshold: f32) -> Self {
        Self {
            kind,
            max_y,
            threshold,
        }
    }

    #[inline]
    pub fn matches(&self, y: i32, noise: f32) -> bool {
        self.max_y.is_none_or(|max_y| y < max_y) && noise > self.threshold
    }
}

/// Chooses rock or a mineral for deep solid cells.
#[derive(Debug)]
pub struct OreAssignor {
    noise: NoiseField,
    scale: f32,
    offset: f32,
    enable: bool,
    bands: Vec<OreBand>,
}

impl OreAssignor {
    pub fn new(params: &WorldGenParams) -> Self {
        Self {
            noise: NoiseField::new(params.seed),
            scale: params.ore_scale,
            offset: params.ore_offset,
            enable: params.ores_enable,
            bands: params.ore_bands.clone(),
        }
    }

    /// Ore noise for a column; depth does not enter the sample.
    #[inline]
    pub fn sample(&self, wx: i32, wz: i32) -> f32 {
        self.noise.sample01(
            wx as f32 * self.scale + self.offset,
            wz as f32 * self.scale + self.offset,
        )
    }

    /// First matching band wins, so deeper and rarer ores shadow the
    /// shallower bands that would also accept the same sample.
    pub fn classify(&self, y: i32, noise: f32) -> BlockKind {
        self.bands
            .iter()
            .find(|band| band.matches(y, noise))
            .map_or(BlockKind::Rock, |band| band.kind)
    }

    pub fn stone_or_ore(&self, wx: i32, y: i32, wz: i32) -> BlockKind {
        if !self.enable {
            return BlockKind::Rock;
        }
        self.classify(y, self.sample(wx, wz))
    }

    pub fn bands(&self) -> &[OreBand] {
        &self.bands
    }
}
