//! Output sink selection
//!
//! Rendered output goes either to the process's standard output or to a
//! file at a caller-specified path. The two destinations are a proper
//! discriminated type so both paths are exhaustively checked instead of
//! branching on a sentinel string.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::render::error::{RenderError, Result};

/// Destination for rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to the process's standard output stream
    Stdout,
    /// Create (or truncate) a file at the given path
    File(PathBuf),
}

impl OutputTarget {
    /// Parse a destination argument
    ///
    /// The sentinel `stdout` is matched case-insensitively; anything else
    /// is treated as a filesystem path.
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("stdout") {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Write all rendered bytes to this destination
    ///
    /// The stdout branch never creates or touches any file. The file
    /// branch verifies the parent directory exists before creating
    /// anything, so a bad path fails fast with no partial file; the file
    /// handle is dropped on every exit path, including mid-write failures.
    /// The destination is always overwritten in full, never appended to.
    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle
                    .write_all(bytes)
                    .map_err(|e| RenderError::DestinationWrite {
                        path: PathBuf::from("stdout"),
                        source: e,
                    })
            }
            Self::File(path) => {
                let dir = parent_dir(path);
                if !dir.is_dir() {
                    return Err(RenderError::DestinationDirectoryMissing(dir));
                }

                let mut file = File::create(path).map_err(|e| RenderError::DestinationWrite {
                    path: path.clone(),
                    source: e,
                })?;
                debug!("Created output file: {}", path.display());

                file.write_all(bytes)
                    .map_err(|e| RenderError::DestinationWrite {
                        path: path.clone(),
                        source: e,
                    })
            }
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Directory the destination file would be created in
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
