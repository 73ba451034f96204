#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nutrilog::run().await
}
