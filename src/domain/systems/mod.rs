// Per-tick simulation rules.

pub mod movement;
pub mod spawn;
