use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open {} for writing: {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("cannot write to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed sequence: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
