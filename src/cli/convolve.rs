//! Convolve command implementation.

use std::path::Path;

use clap::Args;

use crate::discovery::Manifest;
use crate::error::{FxError, Result};
use crate::output::Printer;
use crate::parser::load_kernel;
use crate::transform::Transform;
use crate::types::{BuiltinKernels, Kernel};

use super::{run_transform, InputArgs};

/// Apply a convolution kernel to images
#[derive(Args, Debug)]
pub struct ConvolveArgs {
    /// Builtin kernel name or path to a kernel file
    #[arg(long, short)]
    pub kernel: Option<String>,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: ConvolveArgs, printer: &Printer) -> Result<()> {
    let manifest = args.input.manifest()?;
    let kernel = kernel_for(&args, &manifest)?;
    run_transform(&args.input, &manifest, &Transform::Convolve(kernel), printer)
}

/// Kernel from `--kernel`, falling back to the manifest.
fn kernel_for(args: &ConvolveArgs, manifest: &Manifest) -> Result<Kernel> {
    let spec = args
        .kernel
        .as_deref()
        .or(manifest.kernel.as_deref())
        .ok_or_else(|| FxError::InvalidParameter {
            message: "no kernel given".to_string(),
            help: Some(format!(
                "Pass --kernel with a file path or one of: {}",
                BuiltinKernels::names().join(", ")
            )),
        })?;

    resolve_kernel(spec)
}

/// Resolve a builtin kernel name, or load a kernel file.
pub fn resolve_kernel(spec: &str) -> Result<Kernel> {
    if let Some(kernel) = BuiltinKernels::get(spec) {
        return Ok(kernel);
    }

    let path = Path::new(spec);
    if path.exists() {
        return load_kernel(path);
    }

    Err(FxError::InvalidParameter {
        message: format!("unknown kernel `{}`", spec),
        help: Some(format!(
            "Not a file; builtin kernels are: {}",
            BuiltinKernels::names().join(", ")
        )),
    })
}
