use std::{io, path::PathBuf};

use gridlogic_core::PuzzleKind;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read settings file {}: {source}", path.display())]
    ReadSettings { path: PathBuf, source: io::Error },
    #[display("invalid settings file: {_0}")]
    ParseSettings(#[from] serde_json::Error),
    #[display("{_0} puzzles cannot be generated yet")]
    UnsupportedKind(#[error(not(source))] PuzzleKind),
}
