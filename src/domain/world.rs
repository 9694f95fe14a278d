// World state container: tuning, the turret and every live enemy.

use crate::domain::state::{Enemy, EnemySnapshot, Turret, WorldSnapshot};
use crate::domain::systems::{movement, spawn};
use crate::domain::tuning::{EnemyTuning, TurretTuning};
use rand::Rng;

/// Owned world state, advanced one tick at a time by the frame driver.
///
/// Enemies are only ever added; nothing despawns or damages them.
pub struct World {
    pub enemy_tuning: EnemyTuning,
    pub turret: Turret,
    enemies: Vec<Enemy>,
    next_enemy_id: u64,
    // Ticks left before the spawn roll resumes.
    spawn_cooldown: u32,
    tick: u64,
}

impl World {
    pub fn new(enemy_tuning: EnemyTuning, turret_tuning: TurretTuning) -> Self {
        Self {
            enemy_tuning,
            turret: Turret::build(&turret_tuning),
            enemies: Vec::new(),
            next_enemy_id: 1,
            spawn_cooldown: 0,
            tick: 0,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Number of ticks applied so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Spawns one enemy on the spawn ring, facing the turret.
    pub fn spawn_enemy<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Enemy {
        let id = self.next_enemy_id;
        self.next_enemy_id = self.next_enemy_id.wrapping_add(1);

        let enemy = spawn::spawn_enemy(id, rng, &self.enemy_tuning, self.turret.position);
        self.enemies.push(enemy);
        &self.enemies[self.enemies.len() - 1]
    }

    /// Runs one update step: maybe spawn, then move every enemy.
    ///
    /// Returns the id of the enemy spawned this tick, if any. A fresh enemy
    /// moves on the tick it was spawned.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        self.tick += 1;

        let spawned = if self.spawn_cooldown > 0 {
            self.spawn_cooldown -= 1;
            None
        } else if self.enemy_tuning.spawn_chance.roll(rng) {
            let id = self.spawn_enemy(rng).id;
            self.spawn_cooldown = self.enemy_tuning.min_spawn_delay_ticks;
            Some(id)
        } else {
            None
        };

        for e in &mut self.enemies {
            movement::tick_enemy(e);
        }

        spawned
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            turret_position: self.turret.position,
            turret_life: self.turret.life,
            enemies: self.enemies.iter().map(EnemySnapshot::from).collect(),
        }
    }
}
