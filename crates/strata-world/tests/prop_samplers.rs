use proptest::prelude::*;
use strata_blocks::BlockKind;
use strata_world::{HeightSampler, OreAssignor, TerrainSamplers, WorldGenConfig, WorldGenParams};

fn coord() -> impl Strategy<Value = i32> {
    -100_000i32..=100_000
}

fn params_with_seed(seed: i32) -> WorldGenParams {
    let mut cfg = WorldGenConfig::default();
    cfg.seed = seed;
    WorldGenParams::from_config(&cfg).unwrap()
}

fn ore_rank(kind: BlockKind) -> u8 {
    match kind {
        BlockKind::OreGem => 4,
        BlockKind::OreGold => 3,
        BlockKind::OreIron => 2,
        BlockKind::OreCoal => 1,
        _ => 0,
    }
}

proptest! {
    // Identical inputs and configuration yield identical heights, across fresh samplers
    #[test]
    fn height_is_deterministic(seed in any::<i32>(), x in coord(), z in coord()) {
        let p = params_with_seed(seed);
        let a = HeightSampler::new(&p);
        let b = HeightSampler::new(&p);
        prop_assert_eq!(a.height_at(x, z), b.height_at(x, z));
        prop_assert_eq!(a.height_at(x, z), a.height_at(x, z));
    }

    // Heights always land inside [1, chunk_height - 1]
    #[test]
    fn height_in_range(seed in any::<i32>(), x in coord(), z in coord(), variation in -200i32..200, ground in -100i32..200) {
        let mut cfg = WorldGenConfig::default();
        cfg.seed = seed;
        cfg.height.height_variation = variation;
        cfg.height.ground_level = ground;
        let p = WorldGenParams::from_config(&cfg).unwrap();
        let h = HeightSampler::new(&p).height_at(x, z);
        prop_assert!(h >= 1 && h < p.chunk_height as i32);
    }

    // Going deeper with the same noise sample never yields a less rare ore
    #[test]
    fn ore_rarity_never_decreases_with_depth(noise in 0.0f32..1.0, y in 1i32..64) {
        let a = OreAssignor::new(&WorldGenParams::default());
        let here = a.classify(y, noise);
        let deeper = a.classify(y - 1, noise);
        prop_assert!(ore_rank(deeper) >= ore_rank(here));
    }

    // Whatever a shallower band picks, the deepest matching band overrides it
    #[test]
    fn deepest_matching_band_wins(noise in 0.0f32..1.0, y in 0i32..64) {
        let a = OreAssignor::new(&WorldGenParams::default());
        let expect = a
            .bands()
            .iter()
            .filter(|b| b.matches(y, noise))
            .min_by_key(|b| b.max_y.unwrap_or(i32::MAX))
            .map_or(BlockKind::Rock, |b| b.kind);
        prop_assert_eq!(a.classify(y, noise), expect);
    }

    // Bedrock at y = 0 and no carving at or above the surface cover
    #[test]
    fn cell_invariants(seed in any::<i32>(), x in coord(), z in coord()) {
        let p = params_with_seed(seed);
        let s = TerrainSamplers::new(&p);
        let surface = s.height.height_at(x, z);
        prop_assert_eq!(s.block_at(x, 0, z, surface), BlockKind::Bedrock);
        prop_assume!(surface > 1);
        let top = s.block_at(x, surface - 1, z, surface);
        prop_assert!(matches!(top, BlockKind::SurfaceCover | BlockKind::Sediment));
    }
}

#[test]
fn load_params_from_file_and_report_errors() {
    let dir = std::env::temp_dir().join(format!("strata-world-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("world.toml");
    std::fs::write(&path, "seed = 9\n[height]\noctaves = 2\n").unwrap();
    let p = strata_world::load_params_from_path(&path).unwrap();
    assert_eq!(p.seed, 9);
    assert_eq!(p.octaves, 2);

    std::fs::write(&path, "[height]\noctaves = 0\n").unwrap();
    assert!(matches!(
        strata_world::load_params_from_path(&path),
        Err(strata_world::ConfigError::Invalid { .. })
    ));

    std::fs::write(&path, "[height\n").unwrap();
    assert!(matches!(
        strata_world::load_params_from_path(&path),
        Err(strata_world::ConfigError::Parse(_))
    ));

    let missing = dir.join("missing.toml");
    assert!(matches!(
        strata_world::load_params_from_path(&missing),
        Err(strata_world::ConfigError::Io { .. })
    ));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/world.toml");
    let p = strata_world::load_params_from_path(&path).unwrap();
    assert_eq!(p, WorldGenParams::default());
}
