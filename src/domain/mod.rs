// Domain layer: world state, scene description and simulation rules.

pub mod camera;
pub mod ports;
pub mod scene;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use state::{Enemy, EnemySnapshot, Turret, WorldSnapshot};
pub use world::World;
