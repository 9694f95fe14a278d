use super::frame::FrameClock;
use crate::domain::ports::{Frame, Renderer};
use crate::domain::scene::Scene;
use crate::domain::world::World;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{debug, info, trace};

/// Drives the world: exactly one update/render pair per frame until the frame
/// source closes or `shutdown` fires. Hands the world back on exit.
pub async fn world_task<R, D>(
    mut world: World,
    mut scene: Scene,
    mut rng: R,
    mut renderer: D,
    mut clock: FrameClock,
    shutdown: Arc<Notify>,
) -> World
where
    R: Rng + Send,
    D: Renderer,
{
    info!(display = clock.uses_display(), "frame loop started");

    loop {
        let delta = tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            frame = clock.next_frame() => match frame {
                Some(delta) => delta,
                None => {
                    info!("frame source closed");
                    break;
                }
            },
        };

        step(&mut world, &mut scene, &mut rng, &mut renderer, delta);
    }

    info!(
        ticks = world.tick_count(),
        enemies = world.enemies().len(),
        "frame loop stopped"
    );
    world
}

/// One frame: fit the camera to the surface, advance the world, draw.
pub fn step<R, D>(world: &mut World, scene: &mut Scene, rng: &mut R, renderer: &mut D, delta: Duration)
where
    R: Rng + ?Sized,
    D: Renderer + ?Sized,
{
    if let Some((width, height)) = renderer.viewport() {
        scene.camera.resize(width, height);
    }

    if let Some(enemy_id) = world.tick(rng) {
        debug!(
            enemy_id,
            enemies = world.enemies().len(),
            tick = world.tick_count(),
            "enemy joined the wave"
        );
    }
    trace!(tick = world.tick_count(), delta_ms = delta.as_secs_f64() * 1000.0, "tick");

    renderer.render(&Frame {
        tick: world.tick_count(),
        delta,
        scene: &*scene,
        world: &*world,
    });
}
