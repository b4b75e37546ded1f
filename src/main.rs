#[tokio::main]
async fn main() {
    if let Err(e) = prognosa::run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
