pub mod completions;
pub mod convolve;
pub mod grayscale;
pub mod halftone;
pub mod init;
pub mod kernels;
mod process;
mod watch;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::Manifest;
use crate::error::Result;
use crate::output::Printer;

pub use process::{process_image, run_transform};

/// pixfx - Grayscale, convolution and halftone image transforms
#[derive(Parser, Debug)]
#[command(name = "pixfx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert images to luma grayscale
    Grayscale(grayscale::GrayscaleArgs),

    /// Apply a convolution kernel to images
    Convolve(convolve::ConvolveArgs),

    /// Render images as two-colour halftone dots
    Halftone(halftone::HalftoneArgs),

    /// List builtin kernels
    Kernels(kernels::KernelsArgs),

    /// Initialize a pixfx project (generates pixfx.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Inputs, output location and mode shared by every transform command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Image files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (defaults to the manifest's `output`, then `dist`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest to read instead of ./pixfx.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep running and re-process inputs whenever they change
    #[arg(long, short)]
    pub watch: bool,
}

impl InputArgs {
    /// Load the manifest named by `--config`, or ./pixfx.yaml if present.
    pub fn manifest(&self) -> Result<Manifest> {
        let cwd = std::env::current_dir()?;
        Manifest::discover(self.config.as_deref(), &cwd)
    }

    /// Output directory after applying manifest defaults.
    pub fn output_dir(&self, manifest: &Manifest) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| manifest.output.clone())
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    match cli.command {
        Commands::Grayscale(args) => grayscale::run(args, printer),
        Commands::Convolve(args) => convolve::run(args, printer),
        Commands::Halftone(args) => halftone::run(args, printer),
        Commands::Kernels(args) => kernels::run(args),
        Commands::Init(args) => init::run(args, printer),
        Commands::Completions(args) => completions::run(args),
    }
}
