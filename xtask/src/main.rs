use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod scripts;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        Some(cli::Commands::Install(args)) => scripts::install(&args),
        Some(cli::Commands::Lint(args)) => scripts::lint::run(&args),
        None => {
            println!("No command given, run `cargo xtask --help` for the list of tasks");
            Ok(())
        }
    }
}
