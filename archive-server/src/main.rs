#[tokio::main]
async fn main() {
    let demo_mode = std::env::args().any(|arg| arg == "--demo");

    if let Err(err) = archive_server::run(demo_mode).await {
        tracing::error!("archive-server failed: {err}");
        std::process::exit(1);
    }
}
