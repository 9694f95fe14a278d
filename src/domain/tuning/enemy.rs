use rand::Rng;

/// How likely a tick is to spawn a new enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnChance {
    Never,
    Always,
    /// One chance in `n` per tick. `OneIn(0)` never spawns.
    OneIn(u32),
}

impl SpawnChance {
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            SpawnChance::Never | SpawnChance::OneIn(0) => false,
            SpawnChance::Always => true,
            SpawnChance::OneIn(n) => rng.gen_ratio(1, n),
        }
    }
}

/// Gameplay tuning for enemies.
///
/// Enemy motion is applied once per tick without delta-time scaling, so `speed`
/// is in world units per tick and the apparent speed follows the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Distance travelled toward the origin every tick.
    pub speed: f32,

    /// Life assigned at spawn.
    pub max_life: u32,

    /// Inner radius of the spawn ring.
    pub start_distance: f32,

    /// Width of the spawn ring beyond `start_distance`.
    pub ring_width: f32,

    pub spawn_chance: SpawnChance,

    /// Ticks to wait after a spawn before rolling again (0 disables the cooldown).
    pub min_spawn_delay_ticks: u32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 1.2,
            max_life: 3,
            start_distance: 1000.0,
            ring_width: 100.0,
            spawn_chance: SpawnChance::OneIn(200),
            min_spawn_delay_ticks: 0,
        }
    }
}
