use std::{
    env,
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    time::Duration,
};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(9099)
}

pub fn bind_address() -> IpAddr {
    env::var("BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Root for the page itself (index.html, vendored scripts).
pub fn public_dir() -> PathBuf {
    env::var("PUBLIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"))
}

/// Output directory of the client bundle build.
pub fn bundle_dir() -> PathBuf {
    env::var("BUNDLE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("build"))
}

/// Runs the world loop in-process with a tracing renderer.
pub fn headless_world() -> bool {
    matches!(
        env::var("HEADLESS_WORLD").as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

pub fn sim_seed() -> Option<u64> {
    env::var("SIM_SEED").ok().and_then(|v| v.parse().ok())
}

// Timer fallback when no display refresh signal exists.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub const HEADLESS_VIEWPORT: (u32, u32) = (1920, 1080);
// Headless frame summaries roughly once a second.
pub const FRAME_LOG_INTERVAL: u64 = 60;
