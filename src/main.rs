#[tokio::main]
async fn main() -> std::io::Result<()> {
    turret_vr::run_with_config().await
}
