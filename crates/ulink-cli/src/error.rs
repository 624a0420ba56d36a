//! CLI errors.

use thiserror::Error;
use ulink_proto::HeaderError;

/// Errors reported by `ulink-header`.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--sink-resource` was given without `--sink-entity`.
    #[error("--sink-resource requires --sink-entity")]
    SinkWithoutEntity,

    /// Header encoding failed.
    #[error("header encoding failed: {0}")]
    Header(#[from] HeaderError),

    /// Writing the output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
