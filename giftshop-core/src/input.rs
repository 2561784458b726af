// Input loading
//
// Reads the range list from a file or stdin. A missing file or blank content
// is not an error: the caller's fallback text is scanned instead and the
// origin records why.

use crate::types::InputOrigin;
use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Argument value that selects stdin instead of a file.
pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Raw text ready for the parser, plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
    pub text: String,
    pub origin: InputOrigin,
}

impl InputSource {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read the source, substituting `fallback` when it is missing or blank.
    ///
    /// Only I/O failures other than "file not found" are returned as errors.
    pub fn load(&self, fallback: &str) -> Result<LoadedInput> {
        let loaded = match self {
            Self::File(path) => load_file(path, fallback)?,
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read ranges from stdin")?;
                from_text(text, fallback, InputOrigin::Stdin, InputOrigin::EmptyStdin)
            }
        };

        info!("{}", loaded.origin.notice());
        Ok(loaded)
    }
}

fn load_file(path: &Path, fallback: &str) -> Result<LoadedInput> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(from_text(
            text,
            fallback,
            InputOrigin::File {
                path: path.to_path_buf(),
            },
            InputOrigin::EmptyFile {
                path: path.to_path_buf(),
            },
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LoadedInput {
            text: fallback.to_string(),
            origin: InputOrigin::MissingFile {
                path: path.to_path_buf(),
            },
        }),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read input file {}", path.display()))
        }
    }
}

fn from_text(text: String, fallback: &str, read: InputOrigin, empty: InputOrigin) -> LoadedInput {
    if text.trim().is_empty() {
        LoadedInput {
            text: fallback.to_string(),
            origin: empty,
        }
    } else {
        LoadedInput { text, origin: read }
    }
}
