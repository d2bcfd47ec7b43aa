use finviz_server::{init_tracing, run};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "server stopped");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
