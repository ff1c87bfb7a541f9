//! Error types

use crate::harness::Counters;
use crate::sniff::EncodingTag;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by loading and running a source
#[derive(Debug, Error)]
pub enum Error {
    /// Source is neither an existing file nor a UTF-8 literal
    #[error("input is neither a readable file nor a text literal: {0}")]
    InputType(String),

    /// Source file exists but could not be read as text
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creation failed outside self-test mode
    #[error("line {line}: {source}: {preview}")]
    Creation {
        line: usize,
        preview: String,
        #[source]
        source: CreationFailure,
    },

    /// Self-test report could not be written
    #[error("failed to write test report: {0}")]
    Report(#[source] std::io::Error),

    /// Self-test halted at the first failing line.
    ///
    /// `source` is `None` when the line failed by being created although
    /// it was marked `!`.
    #[error("stopped on first failure at line {line} (run {}, pass {}, fail {})", .counters.run, .counters.pass, .counters.fail)]
    StoppedOnFailure {
        line: usize,
        counters: Counters,
        #[source]
        source: Option<CreationFailure>,
    },
}

/// Reasons a single creation request failed
#[derive(Debug, Error)]
pub enum CreationFailure {
    /// WKB content was not valid hexadecimal
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Engine refused the content for the declared encoding
    #[error("engine rejected {tag} content")]
    Rejected {
        tag: EncodingTag,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
