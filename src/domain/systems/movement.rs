use crate::domain::state::Enemy;

/// Advances an enemy by one tick of its stored velocity.
///
/// Plain Euler step with no delta-time scaling; `y` is left untouched.
pub fn tick_enemy(e: &mut Enemy) {
    e.position.x += e.velocity.x;
    e.position.z += e.velocity.y;
}
