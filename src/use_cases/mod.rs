// Use cases layer: frame driving and host capability fallbacks.

pub mod frame;
pub mod fullscreen;
pub mod game;

pub use frame::{FrameClock, FrameError};
pub use game::{step, world_task};
