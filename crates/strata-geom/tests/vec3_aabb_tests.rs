use strata_geom::{Aabb, ChunkPos, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_add_sub_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));

    let mut v = Vec3::new(1.0, 1.0, 1.0);
    v += Vec3::new(2.0, 3.0, 4.0);
    v -= Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq(v, Vec3::new(2.0, 2.0, 2.0), 1e-6));
}

#[test]
fn vec3_cross_of_axes_follows_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let z = Vec3::new(0.0, 0.0, 1.0);
    // z × x = +y
    assert!(vec3_approx_eq(z.cross(x), Vec3::UP, 1e-6));
    assert!(vec3_approx_eq(x.cross(z), -Vec3::UP, 1e-6));
}

#[test]
fn vec3_normalized_zero_is_noop() {
    let n = Vec3::new(3.0, 4.0, 0.0).normalized();
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn vec3_min_max_componentwise() {
    let a = Vec3::new(1.0, 5.0, -2.0);
    let b = Vec3::new(3.0, -1.0, 0.0);
    assert_eq!(a.min(b), Vec3::new(1.0, -1.0, -2.0));
    assert_eq!(a.max(b), Vec3::new(3.0, 5.0, 0.0));
    assert_eq!(Vec3::from([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
}

#[test]
fn aabb_from_points_encloses_all() {
    let pts = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, -1.0, 4.0),
        Vec3::new(-3.0, 7.0, 1.0),
    ];
    let bb = Aabb::from_points(pts).unwrap();
    assert_eq!(bb.min, Vec3::new(-3.0, -1.0, 0.0));
    assert_eq!(bb.max, Vec3::new(2.0, 7.0, 4.0));
    assert_eq!(bb.extent(), Vec3::new(5.0, 8.0, 4.0));
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn chunk_pos_world_columns() {
    let p = ChunkPos::new(-1, 2);
    assert_eq!(p.block_origin(16), (-16, 32));
    assert_eq!(p.world_column(16, 3, 15), (-13, 47));
    assert_eq!(p.offset(1, -2), ChunkPos::new(0, 0));
    let t: (i32, i32) = p.into();
    assert_eq!(ChunkPos::from(t), p);
}

#[test]
fn chunk_pos_checked_arithmetic() {
    let p = ChunkPos::new(-1, 2);
    assert_eq!(p.checked_block_origin(16), Some((-16, 32)));
    assert_eq!(p.checked_offset(1, -2), Some(ChunkPos::new(0, 0)));

    assert_eq!(ChunkPos::new(200_000_000, 0).checked_block_origin(16), None);
    assert_eq!(ChunkPos::new(0, i32::MIN).checked_block_origin(2), None);
    assert_eq!(ChunkPos::new(i32::MAX, 0).checked_offset(1, 0), None);
    assert_eq!(ChunkPos::new(0, 0).checked_block_origin(0), None);

    // i32::MAX / 16 * 16 + 15 == i32::MAX: the far column just fits.
    assert!(ChunkPos::new(i32::MAX / 16, 0).checked_block_origin(16).is_some());
    assert_eq!(ChunkPos::new(i32::MAX / 16 + 1, 0).checked_block_origin(16), None);
    assert_eq!(ChunkPos::new(i32::MIN / 16, 0).checked_block_origin(16), Some((i32::MIN, 0)));
}
