// Headless stand-in for the stereo renderer: reports frames through tracing.

use crate::domain::ports::{Frame, Renderer};
use crate::interface_adapters::protocol::WorldSnapshotDto;
use tracing::{debug, trace, warn};

pub struct TracingRenderer {
    viewport: (u32, u32),
    // Summarize every `log_every` ticks at debug level.
    log_every: u64,
}

impl TracingRenderer {
    pub fn new(viewport: (u32, u32), log_every: u64) -> Self {
        Self {
            viewport,
            log_every: log_every.max(1),
        }
    }
}

impl Renderer for TracingRenderer {
    fn viewport(&self) -> Option<(u32, u32)> {
        Some(self.viewport)
    }

    fn render(&mut self, frame: &Frame<'_>) {
        if frame.tick % self.log_every == 0 {
            debug!(
                tick = frame.tick,
                enemies = frame.world.enemies().len(),
                aspect = frame.scene.camera.aspect,
                "frame"
            );
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            match serde_json::to_string(&WorldSnapshotDto::from(frame.world.snapshot())) {
                Ok(json) => trace!(%json, "world snapshot"),
                Err(e) => warn!(error = %e, "failed to serialize world snapshot"),
            }
        }
    }
}
