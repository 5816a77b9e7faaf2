mod app;
mod effects;
mod input;
mod logging;
mod panel;

use clap::Parser;

/// Terminal fact-check panel: submit text or an image, get a verdict.
#[derive(Debug, Parser)]
#[command(name = "sidelens", version)]
struct Cli {
    /// Base URL of the analysis backend.
    #[arg(long, env = "SIDELENS_BACKEND", default_value = "http://127.0.0.1:8888")]
    backend: String,
    /// Also log to the terminal instead of only ./sidelens.log.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose);
    app::run(cli.backend)
}
