// SPDX-License-Identifier: MPL-2.0
use crate::style::IconStyle;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),

    /// No asset exists for the requested name and style.
    NotFound {
        name: String,
        style: IconStyle,
        path: PathBuf,
    },

    /// The rasterizer rejected the (recolored) vector source.
    Rasterization(String),

    /// A request argument is outside the accepted domain (empty name, zero size, ...).
    InvalidInput(String),
}

impl Error {
    /// Returns `true` for the missing-asset variant.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NotFound { name, style, path } => write!(
                f,
                "Icon '{}' with style '{}' not found at {}",
                name,
                style,
                path.display()
            ),
            Error::Rasterization(e) => write!(f, "Rasterization Error: {}", e),
            Error::InvalidInput(e) => write!(f, "Invalid Input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
