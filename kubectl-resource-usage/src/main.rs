use clap::Parser as _;

mod cli;
mod output;
mod pipeline;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    if let Err(err) = pipeline::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
