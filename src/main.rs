use std::error::Error;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;
use strata_chunk::{GenerateError, generate_chunk};
use strata_mesh_cpu::build_mesh_world;
use strata_world::{WorldGenConfig, WorldGenParams, load_config_from_path};

mod cli;
mod report;

use cli::Cli;
use report::{ChunkReport, Totals};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn resolve_params(cli: &Cli) -> Result<WorldGenParams, Box<dyn Error>> {
    let mut cfg = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => WorldGenConfig::default(),
    };
    if let Some(seed) = cli.seed {
        cfg.seed = seed;
    }
    if let Some(level) = cli.water_level {
        cfg.water.level = level;
    }
    if cli.lacunarity_fix {
        cfg.height.lacunarity_fix = true;
    }
    Ok(WorldGenParams::from_config(&cfg)?)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let params = resolve_params(cli)?;
    let positions = cli.chunk_positions(params.chunk_size)?;
    log::info!(
        "generating {} chunk(s) of {}x{}x{} (seed {})",
        positions.len(),
        params.chunk_size,
        params.chunk_height,
        params.chunk_size,
        params.seed
    );

    let start = Instant::now();
    // Chunks are independent; each worker owns its volume and mesh.
    let reports = positions
        .par_iter()
        .map(|&pos| -> Result<ChunkReport, GenerateError> {
            let volume = generate_chunk(pos, &params)?;
            let mesh = build_mesh_world(&volume);
            Ok(ChunkReport::new(&volume, &mesh))
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("finished in {:?}", start.elapsed());

    let mut totals = Totals::default();
    for r in &reports {
        print!("{r}");
        totals.add(r);
    }
    println!("{totals}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
