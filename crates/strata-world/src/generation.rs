use strata_blocks::BlockKind;

use crate::caves::CaveField;
use crate::height::HeightSampler;
use crate::ores::OreAssignor;
use crate::worldgen::WorldGenParams;

/// The three terrain samplers built once per chunk from a params snapshot.
#[derive(Debug)]
pub struct TerrainSamplers {
    pub height: HeightSampler,
    pub caves: CaveField,
    pub ores: OreAssignor,
    water_level: i32,
    cave_floor_y: i32,
}

impl TerrainSamplers {
    pub fn new(params: &WorldGenParams) -> Self {
        Self {
            height: HeightSampler::new(params),
            caves: CaveField::new(params),
            ores: OreAssignor::new(params),
            water_level: params.water_level,
            cave_floor_y: params.cave_floor_y,
        }
    }

    /// Final block kind of world cell `(wx, y, wz)` whose column surface is `surface`.
    pub fn block_at(&self, wx: i32, y: i32, wz: i32, surface: i32) -> BlockKind {
        classify_cell(
            y,
            surface,
            self.water_level,
            self.cave_floor_y,
            || self.caves.is_cave(wx, y, wz),
            || self.ores.stone_or_ore(wx, y, wz),
        )
    }
}

/// Priority-ordered column classification.
///
/// The cave and ore closures are only invoked for cells where their
/// answer can change the result.
pub fn classify_cell(
    y: i32,
    surface: i32,
    water_level: i32,
    cave_floor_y: i32,
    is_cave: impl FnOnce() -> bool,
    stone_or_ore: impl FnOnce() -> BlockKind,
) -> BlockKind {
    if y == 0 {
        return BlockKind::Bedrock;
    }
    if y > cave_floor_y && y < surface - 1 && is_cave() {
        return BlockKind::Void;
    }
    if y < surface - 4 {
        return stone_or_ore();
    }
    if y < surface - 1 {
        return BlockKind::SubsurfaceFill;
    }
    if y == surface - 1 {
        // Shoreline columns get sediment instead of cover.
        return if surface > water_level + 1 {
            BlockKind::SurfaceCover
        } else {
            BlockKind::Sediment
        };
    }
    if y < water_level {
        return BlockKind::Liquid;
    }
    BlockKind::Void
}
