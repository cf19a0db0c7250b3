use std::path::PathBuf;

use clap::Parser;
use strata_geom::ChunkPos;

/// Generate terrain chunks and report their block and mesh statistics.
#[derive(Debug, Parser)]
#[command(name = "strata", version, about)]
pub struct Cli {
    /// World config (TOML). Built-in defaults when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Overrides the config seed.
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i32>,

    /// Chunk grid position of the first chunk, as `X,Z`.
    #[arg(long, value_name = "X,Z", default_value = "0,0", value_parser = parse_chunk_pos, allow_hyphen_values = true)]
    pub chunk: ChunkPos,

    /// Generate an N×N block of chunks starting at `--chunk`.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub grid: u32,

    /// Overrides the water level.
    #[arg(long, allow_hyphen_values = true)]
    pub water_level: Option<i32>,

    /// Step octave frequency by lacunarity instead of persistence.
    #[arg(long)]
    pub lacunarity_fix: bool,

    /// Debug-level logging (RUST_LOG still wins when set).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Chunk positions covered by `--chunk` and `--grid`, row by row.
    /// Fails if any of them has world columns outside `i32` for chunks of
    /// width `chunk_size`.
    pub fn chunk_positions(&self, chunk_size: usize) -> Result<Vec<ChunkPos>, String> {
        let n = self.grid as i32;
        (0..n)
            .flat_map(|dz| (0..n).map(move |dx| (dx, dz)))
            .map(|(dx, dz)| {
                self.chunk
                    .checked_offset(dx, dz)
                    .filter(|pos| pos.checked_block_origin(chunk_size).is_some())
                    .ok_or_else(|| {
                        format!(
                            "chunk ({}, {}) + ({dx}, {dz}) is outside the world for {chunk_size}-wide chunks",
                            self.chunk.cx, self.chunk.cz
                        )
                    })
            })
            .collect()
    }
}

fn parse_chunk_pos(s: &str) -> Result<ChunkPos, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Z but got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad chunk coordinate `{v}`: {e}"))
    };
    Ok(ChunkPos::new(parse(x)?, parse(z)?))
}
