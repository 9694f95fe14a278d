use glam::Vec3;

/// Gameplay tuning for the player turret.
#[derive(Debug, Clone, Copy)]
pub struct TurretTuning {
    /// World-space placement of the turret assembly.
    pub position: Vec3,

    /// Life assigned when the turret is built.
    pub max_life: u32,
}

impl Default for TurretTuning {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            max_life: 5,
        }
    }
}
