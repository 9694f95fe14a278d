use crate::domain::state::Enemy;
use crate::domain::tuning::EnemyTuning;
use glam::{Vec2, Vec3};
use rand::Rng;
use tracing::debug;

/// Picks a random point on the ground plane inside the ring
/// `[ring_inner, ring_inner + ring_width]` around the origin.
///
/// The bearing is drawn in whole degrees and the radius linearly, so points
/// cluster toward the inner edge rather than being area-uniform.
pub fn random_point_in_ring<R: Rng + ?Sized>(rng: &mut R, ring_inner: f32, ring_width: f32) -> Vec3 {
    let bearing = (rng.gen_range(0..360u32) as f32).to_radians();
    let radius = ring_inner + (rng.gen_range(0.0..1.0f32) * ring_width).floor();
    Vec3::new(bearing.sin() * radius, 0.0, bearing.cos() * radius)
}

/// Rotation about Y that orients `from` toward `to` (the origin when `to` is `None`).
///
/// Equal z coordinates divide by zero; the result is then ±π/2 or NaN.
pub fn angle_toward_point(from: Vec3, to: Option<Vec3>) -> f32 {
    let to = to.unwrap_or(Vec3::ZERO);
    ((from.x - to.x) / (from.z - to.z)).atan()
}

/// Per-tick velocity pointing from `position` to the origin with magnitude `speed`.
pub fn velocity_toward_origin(position: Vec3, speed: f32) -> Vec2 {
    let hyp = (position.x * position.x + position.z * position.z).sqrt();
    Vec2::new(-position.x * (speed / hyp), -position.z * (speed / hyp))
}

pub fn spawn_enemy<R: Rng + ?Sized>(
    id: u64,
    rng: &mut R,
    tuning: &EnemyTuning,
    turret_position: Vec3,
) -> Enemy {
    let position = random_point_in_ring(rng, tuning.start_distance, tuning.ring_width);
    let facing = angle_toward_point(position, Some(turret_position));
    let velocity = velocity_toward_origin(position, tuning.speed);

    debug!(
        enemy_id = id,
        x = position.x,
        z = position.z,
        facing,
        "enemy spawned"
    );

    Enemy {
        id,
        position,
        velocity,
        facing,
        life: tuning.max_life,
    }
}
