#[tokio::main]
async fn main() {
    reception_backend::run().await;
}
