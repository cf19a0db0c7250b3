//! Terrain samplers and worldgen parameters.
#![forbid(unsafe_code)]

pub mod caves;
pub mod error;
pub mod generation;
pub mod height;
pub mod noise;
pub mod ores;
pub mod worldgen;

pub use caves::CaveField;
pub use error::ConfigError;
pub use generation::{TerrainSamplers, classify_cell};
pub use height::HeightSampler;
pub use noise::NoiseField;
pub use ores::{OreAssignor, OreBand};
pub use worldgen::{
    WorldGenConfig, WorldGenParams, checked_volume_len, load_config_from_path, load_params_from_path,
};
