//! Block kinds and the static material table.
#![forbid(unsafe_code)]

pub mod material;
pub mod types;

pub use material::{MaterialInfo, Rgb, all_materials, material};
pub use types::{BLOCK_KIND_COUNT, BlockKind};
