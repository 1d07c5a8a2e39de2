use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todoview::tui::run().await
}
