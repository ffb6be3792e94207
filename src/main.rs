#![forbid(unsafe_code)]

mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    cmd_safety_gate::logging::init();

    let cli = cli::Cli::parse();
    let code = cli::run(cli).await;
    std::process::exit(code);
}
