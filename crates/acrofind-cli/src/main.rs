mod cli;
mod input;
mod style;

use clap::Parser;

use cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli)
}
