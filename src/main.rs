#[tokio::main]
async fn main() -> std::io::Result<()> {
    live_booking::run().await
}
