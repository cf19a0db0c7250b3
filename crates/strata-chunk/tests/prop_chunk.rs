use proptest::prelude::*;
use strata_blocks::BlockKind;
use strata_chunk::{ChunkVolume, GenerateError, generate_chunk};
use strata_geom::ChunkPos;
use strata_world::{WorldGenConfig, WorldGenParams};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn chunk_coord() -> impl Strategy<Value = i32> {
    -10_000i32..=10_000
}

// Half near the representable edge for 4-wide chunks, half anywhere.
fn wide_coord() -> impl Strategy<Value = i32> {
    prop_oneof![any::<i32>(), -(1i32 << 29) - 2..=(1i32 << 29) + 2]
}

fn params(seed: i32, size: i32) -> WorldGenParams {
    let mut cfg = WorldGenConfig::default();
    cfg.seed = seed;
    cfg.chunk.size = size;
    WorldGenParams::from_config(&cfg).unwrap()
}

proptest! {
    // idx maps each (x,y,z) within bounds to a unique in-range index
    #[test]
    fn idx_is_unique_and_in_range(size in dim(), height in dim()) {
        let expect = size * height * size;
        let v = ChunkVolume::from_blocks(ChunkPos::new(0, 0), size, height, vec![BlockKind::Void; expect]).unwrap();
        let mut seen = vec![false; expect];
        for z in 0..size { for y in 0..height { for x in 0..size {
            let i = v.idx(x, y, z);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // get agrees with get_local inside and returns None outside
    #[test]
    fn get_matches_linear_storage(size in dim(), height in dim()) {
        let expect = size * height * size;
        let blocks = (0..expect).map(|i| BlockKind::from_index(i % 13)).collect();
        let v = ChunkVolume::from_blocks(ChunkPos::new(0, 0), size, height, blocks).unwrap();
        for (x, y, z, kind) in v.iter() {
            prop_assert_eq!(v.get(x as i32, y as i32, z as i32), Some(kind));
            prop_assert_eq!(v.blocks()[v.idx(x, y, z)], kind);
        }
        let (s, h) = (size as i32, height as i32);
        for (x, y, z) in [(-1, 0, 0), (s, 0, 0), (0, -1, 0), (0, h, 0), (0, 0, -1), (0, 0, s)] {
            prop_assert_eq!(v.get(x, y, z), None);
            prop_assert!(v.is_transparent(x, y, z));
        }
    }

    // Wrong buffer lengths are rejected rather than resized
    #[test]
    fn from_blocks_rejects_wrong_length(size in dim(), height in dim(), extra in 1usize..4) {
        let expect = size * height * size;
        let r = ChunkVolume::from_blocks(ChunkPos::new(0, 0), size, height, vec![BlockKind::Rock; expect + extra]);
        let is_length_error = matches!(r, Err(GenerateError::BufferLength { .. }));
        prop_assert!(is_length_error);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Bedrock floor everywhere; carved void only strictly between y=5 and the cover layer
    #[test]
    fn bedrock_and_cave_exclusion(seed in any::<i32>(), cx in chunk_coord(), cz in chunk_coord()) {
        let p = params(seed, 8);
        let v = generate_chunk(ChunkPos::new(cx, cz), &p).unwrap();
        for x in 0..v.size() {
            for z in 0..v.size() {
                prop_assert_eq!(v.get_local(x, 0, z), BlockKind::Bedrock);
                let surface = v.surface_height(x, z).unwrap();
                prop_assert!(surface >= 1 && surface < v.height() as i32);
                for y in 0..surface {
                    if v.get_local(x, y as usize, z) == BlockKind::Void {
                        prop_assert!(y > 5 && y < surface - 1, "void at y={} surface={}", y, surface);
                    }
                }
            }
        }
    }

    // Any i32 origin either generates at the exact wide-integer world offset or is rejected
    #[test]
    fn origin_never_wraps(cx in wide_coord(), cz in wide_coord()) {
        let mut cfg = WorldGenConfig::default();
        cfg.chunk.size = 4;
        cfg.chunk.height = 4;
        let p = WorldGenParams::from_config(&cfg).unwrap();
        let fits = |c: i32| (c as i64 * 4) >= i32::MIN as i64 && (c as i64 * 4 + 3) <= i32::MAX as i64;
        match generate_chunk(ChunkPos::new(cx, cz), &p) {
            Ok(v) => {
                prop_assert!(fits(cx) && fits(cz));
                let (wx, wz) = v.world_origin();
                prop_assert_eq!((wx as i64, wz as i64), (cx as i64 * 4, cz as i64 * 4));
            }
            Err(e) => {
                prop_assert!(!(fits(cx) && fits(cz)));
                let out_of_range = matches!(e, GenerateError::OriginOutOfRange { .. });
                prop_assert!(out_of_range);
            }
        }
    }

    // Same origin and params give the same volume
    #[test]
    fn generation_is_deterministic(seed in any::<i32>(), cx in chunk_coord(), cz in chunk_coord()) {
        let p = params(seed, 8);
        let a = generate_chunk(ChunkPos::new(cx, cz), &p).unwrap();
        let b = generate_chunk(ChunkPos::new(cx, cz), &p).unwrap();
        prop_assert_eq!(a.blocks(), b.blocks());
    }
}

#[test]
fn adjacent_chunks_share_continuous_heights() {
    // Column 15 of chunk 0 and column 0 of chunk 1 are world neighbours;
    // both are sampled from the same global field.
    let p = WorldGenParams::default();
    let a = generate_chunk(ChunkPos::new(0, 0), &p).unwrap();
    let b = generate_chunk(ChunkPos::new(1, 0), &p).unwrap();
    let mut c = strata_world::HeightSampler::new(&p).height_at(16, 5);
    assert_eq!(b.surface_height(0, 5), Some(c));
    c = strata_world::HeightSampler::new(&p).height_at(15, 5);
    assert_eq!(a.surface_height(15, 5), Some(c));
}
