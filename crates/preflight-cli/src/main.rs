// Preflight CLI entry point

use clap::Parser;

use preflight_cli::{logging, router::Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = cli.dispatch().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
