//! Input resolution: file path or literal line

use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Where the lines of a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Existing file, one directive per line
    File(PathBuf),
    /// The value itself is the only line
    Literal(String),
}

impl Source {
    /// Resolve a raw argument.
    ///
    /// An existing file wins; any other value must be valid UTF-8 to be
    /// used as a literal line.
    pub fn resolve(value: impl AsRef<OsStr>) -> Result<Self> {
        let value = value.as_ref();
        let path = Path::new(value);
        if path.is_file() {
            return Ok(Source::File(path.to_path_buf()));
        }

        value
            .to_str()
            .map(|text| Source::Literal(text.to_string()))
            .ok_or_else(|| Error::InputType(value.to_string_lossy().into_owned()))
    }

    /// Read every line eagerly, in order
    pub fn lines(&self) -> Result<Vec<String>> {
        match self {
            Source::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(text.lines().map(str::to_string).collect())
            }
            Source::Literal(text) => Ok(vec![text.clone()]),
        }
    }

    /// Short label for logs
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Literal(_) => "<literal>".to_string(),
        }
    }
}

/// Resolve `value` and read its lines
pub fn load_lines(value: impl AsRef<OsStr>) -> Result<Vec<String>> {
    Source::resolve(value)?.lines()
}
