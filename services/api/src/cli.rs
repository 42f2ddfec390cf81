use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use front_desk::error::AppError;

use crate::demo::{run_demo, run_quote, DemoArgs, QuoteArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Front Desk",
    about = "Run and demonstrate the front-desk reservation service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price a prospective stay without holding a room
    Quote(QuoteArgs),
    /// Walk through the full reservation lifecycle against the seed inventory
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the room inventory from a CSV export instead of the built-in layout
    #[arg(long)]
    pub(crate) rooms: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Demo(args) => run_demo(args),
    }
}
