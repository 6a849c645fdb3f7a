#[tokio::main]
async fn main() {
    program_backend::run().await;
}
