use anyhow::Context;
use bus_boarding::utils::logger;
use bus_boarding::web;
use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "bus-boarding-web")]
#[command(about = "HTTP front end for the bus boarding sequence generator")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    addr: SocketAddr,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, None);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    tracing::info!("🚀 Listening on {}", args.addr);

    axum::serve(listener, web::app())
        .await
        .context("server stopped with an error")?;
    Ok(())
}
