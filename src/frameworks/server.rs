// Framework bootstrap for the static file server and the optional headless world.

use crate::domain::World;
use crate::domain::scene::Scene;
use crate::domain::tuning::{EnemyTuning, TurretTuning};
use crate::frameworks::config;
use crate::interface_adapters::protocol::SceneDto;
use crate::interface_adapters::renderer::TracingRenderer;
use crate::interface_adapters::static_files;
use crate::interface_adapters::utils::rng::world_rng;
use crate::use_cases::{FrameClock, world_task};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::{io::Result, sync::Arc};
use tokio::sync::Notify;

/// The two directories exposed by the static server.
#[derive(Debug, Clone)]
pub struct StaticRoots {
    pub public_dir: PathBuf,
    pub bundle_dir: PathBuf,
}

impl StaticRoots {
    pub fn from_env() -> Self {
        Self {
            public_dir: config::public_dir(),
            bundle_dir: config::bundle_dir(),
        }
    }
}

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, roots: StaticRoots) -> Result<()> {
    let address = listener.local_addr()?;
    let app = static_files::router(&roots.public_dir, &roots.bundle_dir);

    tracing::info!(
        %address,
        public_dir = %roots.public_dir.display(),
        bundle_dir = %roots.bundle_dir.display(),
        "listening"
    );

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let shutdown = Arc::new(Notify::new());
    if config::headless_world() {
        spawn_headless_world(shutdown.clone())?;
    }

    let address = SocketAddr::new(config::bind_address(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    let result = run(listener, StaticRoots::from_env()).await;
    shutdown.notify_one();
    result
}

fn spawn_headless_world(shutdown: Arc<Notify>) -> Result<()> {
    let world = World::new(EnemyTuning::default(), TurretTuning::default());
    let scene = Scene::standard();

    match serde_json::to_string(&SceneDto::new(&scene, &world)) {
        Ok(scene_json) => tracing::info!(scene = %scene_json, "initialized"),
        Err(e) => tracing::warn!(error = %e, "failed to serialize scene"),
    }

    // No display refresh signal exists server-side, so this always runs on the timer.
    let clock = FrameClock::detect(None, config::FRAME_INTERVAL)
        .map_err(|e| std::io::Error::other(format!("failed to start frame clock: {e:?}")))?;

    let seed = config::sim_seed();
    tracing::debug!(?seed, "headless world configured");

    tokio::spawn(world_task(
        world,
        scene,
        world_rng(seed),
        TracingRenderer::new(config::HEADLESS_VIEWPORT, config::FRAME_LOG_INTERVAL),
        clock,
        shutdown,
    ));
    Ok(())
}
