use crate::noise::NoiseField;
use crate::worldgen::WorldGenParams;

/// Multi-octave surface elevation.
#[derive(Debug)]
pub struct HeightSampler {
    noise: NoiseField,
    noise_scale: f32,
    octaves: u32,
    persistence: f32,
    frequency_step: f32,
    ground_level: i32,
    height_variation: i32,
    chunk_height: i32,
}

impl HeightSampler {
    pub fn new(params: &WorldGenParams) -> Self {
        Self {
            noise: NoiseField::new(params.seed),
            noise_scale: params.noise_scale,
            octaves: params.octaves,
            persistence: params.persistence,
            frequency_step: params.frequency_step,
            ground_level: params.ground_level,
            height_variation: params.height_variation,
            chunk_height: params.chunk_height as i32,
        }
    }

    /// Accumulated octave noise before scaling into block units.
    pub fn octave_sum(&self, wx: i32, wz: i32) -> f32 {
        let mut amplitude = 1.0_f32;
        let mut frequency = 1.0_f32;
        let mut sum = 0.0_f32;
        for _ in 0..self.octaves {
            let sx = wx as f32 * self.noise_scale * frequency;
            let sz = wz as f32 * self.noise_scale * frequency;
            sum += self.noise.sample01(sx, sz) * amplitude;
            amplitude *= self.persistence;
            // Same factor as amplitude unless the lacunarity fix is enabled.
            frequency *= self.frequency_step;
        }
        sum
    }

    /// Surface height of column `(wx, wz)`, always in `[1, chunk_height - 1]`.
    pub fn height_at(&self, wx: i32, wz: i32) -> i32 {
        let offset = (self.octave_sum(wx, wz) * self.height_variation as f32).round_ties_even();
        let height = self.ground_level.saturating_add(offset as i32);
        height.clamp(1, self.chunk_height - 1)
    }
}
