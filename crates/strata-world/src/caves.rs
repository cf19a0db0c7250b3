use crate::noise::NoiseField;
use crate::worldgen::WorldGenParams;

/// Void predicate built from three orthogonal 2-D projections.
#[derive(Debug)]
pub struct CaveField {
    noise: NoiseField,
    scale: f32,
    vertical_scale: f32,
    threshold: f32,
    offset_xy: f32,
    offset_yz: f32,
    enable: bool,
}

impl CaveField {
    pub fn new(params: &WorldGenParams) -> Self {
        Self {
            noise: NoiseField::new(params.seed),
            scale: params.cave_scale,
            vertical_scale: params.cave_scale * params.cave_vertical_squash,
            threshold: params.cave_threshold,
            offset_xy: params.cave_offset_xy,
            offset_yz: params.cave_offset_yz,
            enable: params.caves_enable,
        }
    }

    /// Mean of the `(x,z)`, `(x+a, y)` and `(y, z+b)` projections.
    pub fn density(&self, wx: i32, y: i32, wz: i32) -> f32 {
        let fx = wx as f32 * self.scale;
        let fz = wz as f32 * self.scale;
        let fy = y as f32 * self.vertical_scale;
        let a = self.noise.sample01(fx, fz);
        let b = self.noise.sample01(fx + self.offset_xy, fy);
        let c = self.noise.sample01(fy, fz + self.offset_yz);
        (a + b + c) / 3.0
    }

    pub fn is_cave(&self, wx: i32, y: i32, wz: i32) -> bool {
        self.enable && self.density(wx, y, wz) > self.threshold
    }
}
