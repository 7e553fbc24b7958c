//! Convolution kernel type and builtin kernels.
//!
//! A kernel is a square matrix of weights with an odd side length so that
//! it has a well-defined center cell. Weights are not normalized: an
//! all-ones 3x3 kernel brightens nine-fold, a kernel summing to zero picks
//! out edges.

use serde::Serialize;

use crate::error::{FxError, Result};

/// A validated n x n kernel, n odd.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from its rows.
    ///
    /// Rejects empty input, rows whose length differs from the row count,
    /// even sizes, and non-finite weights.
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();

        if size == 0 {
            return Err(FxError::InvalidKernel {
                message: "kernel has no rows".to_string(),
                help: Some("A kernel needs at least one row, e.g. `1` / `1.0`".to_string()),
            });
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(FxError::InvalidKernel {
                    message: format!(
                        "row {} has {} weights but the kernel has {} rows",
                        index + 1,
                        row.len(),
                        size
                    ),
                    help: Some("Kernels must be square".to_string()),
                });
            }
        }

        if size % 2 == 0 {
            return Err(FxError::InvalidKernel {
                message: format!("kernel size {} is even", size),
                help: Some("Use an odd size (1, 3, 5, ...) so the kernel has a center".to_string()),
            });
        }

        if let Some(w) = rows.iter().flatten().find(|w| !w.is_finite()) {
            return Err(FxError::InvalidKernel {
                message: format!("weight {} is not a finite number", w),
                help: None,
            });
        }

        Ok(Self {
            size,
            weights: rows.concat(),
        })
    }

    /// Side length n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset of the center cell, n / 2.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at `[i][j]`, where `i` is the row of the kernel as written.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        debug_assert!(j < self.size, "kernel column out of range");
        self.weights[i * self.size + j]
    }

    /// Row `i` of the kernel as a slice of `size()` weights.
    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Weights as nested rows.
    pub fn rows(&self) -> Vec<Vec<f32>> {
        self.weights.chunks(self.size).map(<[f32]>::to_vec).collect()
    }

    /// Sum of all weights. 1.0 preserves overall brightness.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// A named builtin kernel.
#[derive(Debug, Clone, Serialize)]
pub struct NamedKernel {
    pub name: &'static str,
    pub description: &'static str,
    pub kernel: Kernel,
}

/// Registry of builtin kernels.
pub struct BuiltinKernels;

impl BuiltinKernels {
    /// Get all builtin kernels.
    pub fn all() -> Vec<NamedKernel> {
        vec![
            builtin(
                "identity",
                "Leaves the image unchanged",
                [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
            ),
            builtin(
                "box-blur",
                "Averages each 3x3 neighbourhood",
                [[1.0 / 9.0; 3]; 3],
            ),
            builtin(
                "gaussian",
                "3x3 Gaussian blur",
                [
                    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
                    [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
                    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
                ],
            ),
            builtin(
                "sharpen",
                "Boosts the center against its 4-neighbours",
                [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
            ),
            builtin(
                "edge",
                "8-connectivity Laplacian edge detector",
                [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]],
            ),
            builtin(
                "emboss",
                "Diagonal relief",
                [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]],
            ),
        ]
    }

    /// Get a builtin kernel by name.
    pub fn get(name: &str) -> Option<Kernel> {
        Self::all()
            .into_iter()
            .find(|k| k.name == name)
            .map(|k| k.kernel)
    }

    /// Names of all builtin kernels.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|k| k.name).collect()
    }
}

fn builtin(name: &'static str, description: &'static str, rows: [[f32; 3]; 3]) -> NamedKernel {
    NamedKernel {
        name,
        description,
        kernel: Kernel {
            size: 3,
            weights: rows.concat(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let kernel = Kernel::new(vec![vec![1.0]]).unwrap();
        assert_eq!(kernel.size(), 1);
        assert_eq!(kernel.radius(), 0);
        assert_eq!(kernel.weight(0, 0), 1.0);
    }

    #[test]
    fn test_new_empty() {
        assert!(matches!(
            Kernel::new(vec![]),
            Err(FxError::InvalidKernel { .. })
        ));
    }

    #[test]
    fn test_new_even() {
        let result = Kernel::new(vec![vec![0.25; 2]; 2]);
        assert!(matches!(result, Err(FxError::InvalidKernel { .. })));
    }

    #[test]
    fn test_new_not_square() {
        let result = Kernel::new(vec![vec![1.0; 3], vec![1.0; 2], vec![1.0; 3]]);
        assert!(matches!(result, Err(FxError::InvalidKernel { .. })));

        let result = Kernel::new(vec![vec![1.0; 3]; 5]);
        assert!(matches!(result, Err(FxError::InvalidKernel { .. })));
    }

    #[test]
    fn test_new_non_finite() {
        let result = Kernel::new(vec![vec![f32::NAN]]);
        assert!(matches!(result, Err(FxError::InvalidKernel { .. })));
    }

    #[test]
    fn test_weight_indexing() {
        let kernel = Kernel::new(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();

        assert_eq!(kernel.weight(0, 2), 3.0);
        assert_eq!(kernel.weight(2, 0), 7.0);
        assert_eq!(kernel.rows()[1], vec![4.0, 5.0, 6.0]);
        assert_eq!(kernel.row(2), [7.0_f32, 8.0, 9.0].as_slice());
        assert_eq!(kernel.sum(), 45.0);
    }

    #[test]
    fn test_builtins_are_valid() {
        for named in BuiltinKernels::all() {
            let rebuilt = Kernel::new(named.kernel.rows()).unwrap();
            assert_eq!(rebuilt, named.kernel, "{}", named.name);
        }
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(BuiltinKernels::get("sharpen").is_some());
        assert!(BuiltinKernels::get("missing").is_none());
        assert_eq!(BuiltinKernels::get("edge").unwrap().sum(), 0.0);
        assert!(BuiltinKernels::names().contains(&"box-blur"));
    }
}
