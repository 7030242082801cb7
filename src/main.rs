//! objrepo - object repository maintenance CLI

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    objrepo_cli::cli::run().await
}
