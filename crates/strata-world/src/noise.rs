use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Seeded 2-D Perlin field remapped to `[0, 1]`.
///
/// Callers pre-scale coordinates; the generator runs at frequency 1 so a
/// unit step in input space is one lattice cell.
pub struct NoiseField {
    noise: FastNoiseLite,
    seed: i32,
}

impl NoiseField {
    pub fn new(seed: i32) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        Self { noise, seed }
    }

    /// Sample at `(x, y)`, nominally in `[0, 1]` with 0.5 at lattice points.
    #[inline]
    pub fn sample01(&self, x: f32, y: f32) -> f32 {
        (self.noise.get_noise_2d(x, y) + 1.0) * 0.5
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}
