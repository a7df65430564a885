#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lifetrack_backend::run().await
}
