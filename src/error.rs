use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixfx operations
#[derive(Error, Diagnostic, Debug)]
pub enum FxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pixfx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pixfx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pixfx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid kernel: {message}")]
    #[diagnostic(code(pixfx::kernel))]
    InvalidKernel {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid parameter: {message}")]
    #[diagnostic(code(pixfx::parameter))]
    InvalidParameter {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Watch error: {message}")]
    #[diagnostic(code(pixfx::watch))]
    Watch { message: String },
}

pub type Result<T> = std::result::Result<T, FxError>;
