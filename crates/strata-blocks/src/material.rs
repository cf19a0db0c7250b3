use crate::types::{BLOCK_KIND_COUNT, BlockKind};

/// Linear RGB display color, each channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantizes to 8-bit RGBA with the given alpha.
    #[inline]
    pub fn to_rgba8(self, alpha: u8) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), alpha]
    }
}

/// Physical and display properties of one [`BlockKind`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaterialInfo {
    pub kind: BlockKind,
    pub name: &'static str,
    pub is_solid: bool,
    /// Light and sight pass through (void, liquid).
    pub is_transparent: bool,
    pub color: Rgb,
}

impl MaterialInfo {
    const fn solid(kind: BlockKind, name: &'static str, color: Rgb) -> Self {
        Self {
            kind,
            name,
            is_solid: true,
            is_transparent: false,
            color,
        }
    }

    /// Alpha used for mesh vertex colors: zero for void, opaque otherwise.
    #[inline]
    pub fn alpha(&self) -> u8 {
        if self.kind.is_void() { 0 } else { 255 }
    }

    #[inline]
    pub fn rgba8(&self) -> [u8; 4] {
        self.color.to_rgba8(self.alpha())
    }
}

// Indexed by BlockKind discriminant; order must match `BlockKind::ALL`.
static MATERIALS: [MaterialInfo; BLOCK_KIND_COUNT] = [
    MaterialInfo {
        kind: BlockKind::Void,
        name: "void",
        is_solid: false,
        is_transparent: true,
        color: Rgb::new(0.0, 0.0, 0.0),
    },
    MaterialInfo::solid(BlockKind::SurfaceCover, "surface_cover", Rgb::new(0.2, 0.8, 0.2)),
    MaterialInfo::solid(BlockKind::SubsurfaceFill, "subsurface_fill", Rgb::new(0.6, 0.4, 0.2)),
    MaterialInfo::solid(BlockKind::Rock, "rock", Rgb::new(0.5, 0.5, 0.5)),
    MaterialInfo::solid(BlockKind::Bedrock, "bedrock", Rgb::new(0.2, 0.2, 0.2)),
    MaterialInfo::solid(BlockKind::Trunk, "trunk", Rgb::new(0.6, 0.3, 0.1)),
    MaterialInfo::solid(BlockKind::Foliage, "foliage", Rgb::new(0.1, 0.6, 0.2)),
    MaterialInfo {
        kind: BlockKind::Liquid,
        name: "liquid",
        is_solid: false,
        is_transparent: true,
        color: Rgb::new(0.2, 0.4, 0.9),
    },
    MaterialInfo::solid(BlockKind::Sediment, "sediment", Rgb::new(0.9, 0.85, 0.6)),
    MaterialInfo::solid(BlockKind::OreCoal, "ore_coal", Rgb::new(0.3, 0.3, 0.3)),
    MaterialInfo::solid(BlockKind::OreIron, "ore_iron", Rgb::new(0.7, 0.6, 0.5)),
    MaterialInfo::solid(BlockKind::OreGold, "ore_gold", Rgb::new(0.9, 0.8, 0.2)),
    MaterialInfo::solid(BlockKind::OreGem, "ore_gem", Rgb::new(0.3, 0.8, 0.9)),
];

/// Table lookup; never fails.
#[inline]
pub fn material(kind: BlockKind) -> &'static MaterialInfo {
    &MATERIALS[kind as usize]
}

/// The whole table in discriminant order.
#[inline]
pub fn all_materials() -> &'static [MaterialInfo; BLOCK_KIND_COUNT] {
    &MATERIALS
}
