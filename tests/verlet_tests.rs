use drape::{PointMass, TileCollision, Vec2, Vec3};
use drape::vec::Vec;

/// Solid floor at y >= 0 (y grows downward).
struct Floor;

impl TileCollision<f32> for Floor {
    fn tile_collision(&self, position: Vec2<f32>, velocity: Vec2<f32>, _width: f32, _height: f32) -> Vec2<f32> {
        Vec2::new(velocity.x, velocity.y.min(-position.y))
    }
}

#[test]
fn free_fall_gravity() {
    let mut p: PointMass<Vec2<f32>> = PointMass::new(Vec2::new(0.0, 100.0));
    let g = Vec2::new(0.0, -9.81);
    let dt = 1.0 / 60.0;
    let steps = 60;

    for _ in 0..steps {
        p.apply_force(g);
        p.integrate(dt, 0.0);
    }

    let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
    assert!((p.position.y - expected_y).abs() < 1.0, "position.y = {}, expected ~ {}", p.position.y, expected_y);
}

#[test]
fn pinned_point_stays_fixed() {
    let mut p: PointMass<Vec3<f32>> = PointMass::fixed(Vec3::new(5.0, 5.0, 2.0));
    for i in 0..500 {
        p.apply_force(Vec3::new(1000.0, -1000.0, i as f32));
        if i % 2 == 0 {
            p.integrate(1.0 / 60.0, 0.0);
        } else {
            p.integrate_colliding(1.0 / 60.0, 0.3, &Floor, 2.0);
        }
    }
    assert_eq!(p.position, Vec3::new(5.0, 5.0, 2.0));
    assert_eq!(p.acceleration, Vec3::zero());
}

#[test]
fn force_accumulates_until_integration() {
    let mut p: PointMass<Vec2<f32>> = PointMass::new(Vec2::new(0.0, 0.0));
    p.apply_force(Vec2::new(1.0, 0.0));
    p.apply_force(Vec2::new(2.0, 3.0));
    assert_eq!(p.position, Vec2::new(0.0, 0.0));
    assert_eq!(p.acceleration, Vec2::new(3.0, 3.0));

    p.integrate(1.0, 0.0);
    assert_eq!(p.position, Vec2::new(3.0, 3.0));
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn full_damping_drops_carried_velocity() {
    let mut p: PointMass<Vec2<f32>> = PointMass::new(Vec2::new(10.0, 0.0));
    p.previous_position = Vec2::new(0.0, 0.0);
    p.integrate(1.0 / 60.0, 1.0);
    assert_eq!(p.position, Vec2::new(10.0, 0.0));
    assert_eq!(p.velocity_raw(), Vec2::zero());
}

#[test]
fn floor_stops_falling_point() {
    let mut p: PointMass<Vec3<f32>> = PointMass::new(Vec3::new(0.0, -1.0, 4.0));
    for _ in 0..120 {
        p.apply_force(Vec3::new(0.0, 9.81, 0.0));
        p.integrate_colliding(1.0 / 60.0, 0.0, &Floor, 2.0);
    }
    assert!(p.position.y <= 1e-5, "point sank into the floor: y = {}", p.position.y);
    assert_eq!(p.position.z, 4.0);
}

#[test]
fn move_to_leaves_point_at_rest() {
    let mut p: PointMass<Vec2<f32>> = PointMass::fixed(Vec2::new(0.0, 0.0));
    p.move_to(Vec2::new(3.0, 4.0));
    assert_eq!(p.position, Vec2::new(3.0, 4.0));
    p.unpin();
    p.integrate(1.0 / 60.0, 0.0);
    assert_eq!(p.position, Vec2::new(3.0, 4.0));
}
