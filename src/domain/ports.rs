// Ports to host-side collaborators: the stereo renderer and the fullscreen API.

use crate::domain::scene::Scene;
use crate::domain::world::World;
use std::time::Duration;

/// Everything the renderer needs to draw one frame.
pub struct Frame<'a> {
    pub tick: u64,
    /// Time since the previous frame.
    pub delta: Duration,
    pub scene: &'a Scene,
    pub world: &'a World,
}

// Port for the external (stereo) renderer.
pub trait Renderer: Send {
    /// Current drawable size in pixels, if the host has a surface.
    fn viewport(&self) -> Option<(u32, u32)>;
    fn render(&mut self, frame: &Frame<'_>);
}

/// Vendor entry points for entering fullscreen, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Ms,
    Moz,
    Webkit,
}

impl FullscreenApi {
    pub const PREFERENCE: [FullscreenApi; 4] = [
        FullscreenApi::Standard,
        FullscreenApi::Ms,
        FullscreenApi::Moz,
        FullscreenApi::Webkit,
    ];
}

// Port for the element that can be made fullscreen.
pub trait FullscreenTarget {
    fn supports(&self, api: FullscreenApi) -> bool;
    fn request(&mut self, api: FullscreenApi);
}
