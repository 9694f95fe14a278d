// Gameplay tuning, kept apart from runtime/server configuration.

pub mod enemy;
pub mod turret;

pub use enemy::{EnemyTuning, SpawnChance};
pub use turret::TurretTuning;
