//! Halftone command implementation.

use clap::Args;

use crate::discovery::Manifest;
use crate::error::Result;
use crate::output::Printer;
use crate::transform::Transform;
use crate::types::{Colour, Palette};

use super::{run_transform, InputArgs};

/// Render images as two-colour halftone dots
#[derive(Args, Debug)]
pub struct HalftoneArgs {
    /// Dot cell radius in pixels
    #[arg(long, short)]
    pub radius: Option<u32>,

    /// Background colour (hex or CSS name)
    #[arg(long)]
    pub background: Option<String>,

    /// Dot colour (hex or CSS name)
    #[arg(long)]
    pub foreground: Option<String>,

    /// Swap background and foreground
    #[arg(long)]
    pub invert: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: HalftoneArgs, printer: &Printer) -> Result<()> {
    let manifest = args.input.manifest()?;
    let transform = transform_for(&args, &manifest)?;
    run_transform(&args.input, &manifest, &transform, printer)
}

/// Build the halftone transform, flags first, then manifest, then defaults.
fn transform_for(args: &HalftoneArgs, manifest: &Manifest) -> Result<Transform> {
    let radius = args.radius.unwrap_or_else(|| manifest.effective_radius());

    let defaults = Palette::default();
    let background = pick_colour(&args.background, &manifest.background, defaults.background)?;
    let foreground = pick_colour(&args.foreground, &manifest.foreground, defaults.foreground)?;

    let palette = Palette::new(background, foreground);
    let palette = if args.invert { palette.inverted() } else { palette };

    Ok(Transform::Halftone { radius, palette })
}

fn pick_colour(flag: &Option<String>, manifest: &Option<String>, fallback: Colour) -> Result<Colour> {
    match flag.as_deref().or(manifest.as_deref()) {
        Some(s) => Colour::parse(s),
        None => Ok(fallback),
    }
}
