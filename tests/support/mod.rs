// Shared primitives for one-time server bootstrapping across integration tests.
use std::{
    fs,
    // `Arc` shares data between threads; `OnceLock` writes a value only once.
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const INDEX_HTML: &str = "<!doctype html><div id=\"container\"></div>";
pub const BUNDLE_JS: &str = "console.log('bundle');";

// Global base URL used by all tests after the server publishes its bound address.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the server bootstrap path runs only once.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Lay out a fresh public root and bundle root under the system temp dir.
fn make_roots() -> turret_vr::StaticRoots {
    let base = std::env::temp_dir().join(format!("turret-vr-{}", uuid::Uuid::new_v4()));
    let public_dir = base.join("public");
    let bundle_dir = base.join("build");

    fs::create_dir_all(public_dir.join("assets")).expect("create public dir");
    fs::create_dir_all(&bundle_dir).expect("create bundle dir");
    fs::write(public_dir.join("index.html"), INDEX_HTML).expect("write index");
    fs::write(public_dir.join("assets").join("three.min.js"), "// three").expect("write asset");
    fs::write(bundle_dir.join("client-bundle.js"), BUNDLE_JS).expect("write bundle");

    turret_vr::StaticRoots {
        public_dir,
        bundle_dir,
    }
}

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let roots = make_roots();
        // Local one-time slot where the server thread publishes its selected URL.
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Bind to an ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                turret_vr::run(listener, roots).await.expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for URL publication and then wait for the server socket to accept TCP connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
