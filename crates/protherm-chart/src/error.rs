// File: crates/protherm-chart/src/error.rs
// Summary: Error types for program loading, schedule library lookup and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to open or read a program file. Callers usually degrade to an empty program.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("program file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("program file unreadable: {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProgramError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Unreadable { path, source }
        }
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("invalid program identifier {0:?}")]
    InvalidIdentifier(String),
    #[error("cannot read program library {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal rendering failures; surfaced to the caller as a failed response.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
