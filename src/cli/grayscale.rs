use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::transform::Transform;

use super::{run_transform, InputArgs};

/// Convert images to luma grayscale
#[derive(Args, Debug)]
pub struct GrayscaleArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: GrayscaleArgs, printer: &Printer) -> Result<()> {
    let manifest = args.input.manifest()?;
    run_transform(&args.input, &manifest, &Transform::Grayscale, printer)
}
