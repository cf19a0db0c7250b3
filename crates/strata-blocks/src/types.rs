use serde::{Deserialize, Serialize};

/// Every kind of cell a chunk can hold. The discriminant doubles as the
/// index into the material table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockKind {
    #[default]
    Void = 0,
    SurfaceCover = 1,
    SubsurfaceFill = 2,
    Rock = 3,
    Bedrock = 4,
    Trunk = 5,
    Foliage = 6,
    Liquid = 7,
    Sediment = 8,
    OreCoal = 9,
    OreIron = 10,
    OreGold = 11,
    OreGem = 12,
}

pub const BLOCK_KIND_COUNT: usize = 13;

impl BlockKind {
    pub const ALL: [BlockKind; BLOCK_KIND_COUNT] = [
        BlockKind::Void,
        BlockKind::SurfaceCover,
        BlockKind::SubsurfaceFill,
        BlockKind::Rock,
        BlockKind::Bedrock,
        BlockKind::Trunk,
        BlockKind::Foliage,
        BlockKind::Liquid,
        BlockKind::Sediment,
        BlockKind::OreCoal,
        BlockKind::OreIron,
        BlockKind::OreGold,
        BlockKind::OreGem,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`BlockKind::index`]. Out-of-range values map to `Void`.
    #[inline]
    pub const fn from_index(i: usize) -> BlockKind {
        if i < BLOCK_KIND_COUNT {
            Self::ALL[i]
        } else {
            BlockKind::Void
        }
    }

    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, BlockKind::Void)
    }

    #[inline]
    pub const fn is_ore(self) -> bool {
        matches!(
            self,
            BlockKind::OreCoal | BlockKind::OreIron | BlockKind::OreGold | BlockKind::OreGem
        )
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        crate::material::material(self).is_solid
    }

    #[inline]
    pub fn name(self) -> &'static str {
        crate::material::material(self).name
    }
}
