use clap::Parser;
use miette::Result;
use pixfx::cli::Cli;
use pixfx::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    pixfx::cli::run(cli, &printer)?;

    Ok(())
}
