use miette::Diagnostic;
use thiserror::Error;

/// Main error type for strike-assets operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(strike::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(strike::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(strike::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown colour token `{token}` in palette `{palette}`")]
    #[diagnostic(
        code(strike::palette),
        help("Run `strike-assets palette` to list the available tokens")
    )]
    UnknownColour { token: String, palette: String },

    #[error("Builder `{builder}` does not support state `{state}`")]
    #[diagnostic(code(strike::config))]
    UnsupportedState { builder: String, state: String },

    #[error("Builder `{builder}` has no {style} rendition")]
    #[diagnostic(code(strike::config))]
    UnsupportedStyle { builder: String, style: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(strike::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
