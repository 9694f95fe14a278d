// Domain-level simulation entities and snapshot types.

use crate::domain::scene::{self, MeshSpec};
use crate::domain::tuning::TurretTuning;
use glam::{Vec2, Vec3};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u64,
    pub position: Vec3,
    // Per-tick velocity on the ground plane: `x` is world X, `y` is world Z.
    pub velocity: Vec2,
    // Rotation about world Y, fixed at spawn.
    pub facing: f32,
    // Tracked but never consumed; nothing damages enemies yet.
    pub life: u32,
}

pub struct Turret {
    pub position: Vec3,
    pub life: u32,
    pub parts: Vec<MeshSpec>,
}

impl Turret {
    /// Builds the static turret assembly. The turret is never mutated afterwards.
    pub fn build(tuning: &TurretTuning) -> Self {
        Self {
            position: tuning.position,
            life: tuning.max_life,
            parts: scene::turret_parts(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnemySnapshot {
    pub id: u64,
    pub position: Vec3,
    pub facing: f32,
    pub life: u32,
}

#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub turret_position: Vec3,
    pub turret_life: u32,
    pub enemies: Vec<EnemySnapshot>,
}

impl From<&Enemy> for EnemySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id,
            position: e.position,
            facing: e.facing,
            life: e.life,
        }
    }
}
