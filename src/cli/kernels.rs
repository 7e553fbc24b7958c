//! Kernels command: list the builtin kernels.

use clap::Args;

use crate::error::{FxError, Result};
use crate::types::{BuiltinKernels, Kernel, NamedKernel};

/// List builtin kernels
#[derive(Args, Debug)]
pub struct KernelsArgs {
    /// Print the kernels as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: KernelsArgs) -> Result<()> {
    let kernels = BuiltinKernels::all();

    if args.json {
        println!("{}", kernels_json(&kernels)?);
    } else {
        for named in &kernels {
            println!("{}", describe(named));
        }
    }

    Ok(())
}

fn kernels_json(kernels: &[NamedKernel]) -> Result<String> {
    serde_json::to_string_pretty(kernels).map_err(|e| FxError::Parse {
        message: format!("Failed to serialize kernels: {}", e),
        help: None,
    })
}

/// Name, description, weight sum and weight matrix of a kernel.
fn describe(named: &NamedKernel) -> String {
    format!(
        "{}  {} (sum {})\n{}",
        named.name,
        named.description,
        named.kernel.sum(),
        format_kernel(&named.kernel)
    )
}

/// One line per kernel row, weights right-aligned to three decimals.
pub fn format_kernel(kernel: &Kernel) -> String {
    kernel
        .rows()
        .iter()
        .map(|row| row.iter().map(|w| format!("{:>7.3}", w)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
