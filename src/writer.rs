use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Error, Result},
    Sequence,
};

#[derive(Debug)]
/// An output file that has been opened (created or truncated) and is waiting for its sequence.
///
/// The handle is released when the value is dropped, whether or not [`SequenceFile::write`] ran.
pub struct SequenceFile {
    path: PathBuf,
    file: File,
}

impl SequenceFile {
    /// Opens `path` for writing, creating it or truncating any existing content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| Error::FileOpen {
            path: path.clone(),
            source,
        })?;
        debug!("opened {} for writing", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the sequence as ASCII digits with no separators or trailing newline, then closes
    /// the file.
    pub fn write(self, sequence: &Sequence) -> Result<()> {
        let Self { path, file } = self;
        let mut output = BufWriter::new(file);
        output
            .write_all(&sequence.to_ascii())
            .and_then(|()| output.flush())
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
        debug!("wrote {} bytes to {}", sequence.len(), path.display());
        Ok(())
    }
}

/// Opens `path` and writes `sequence` to it in one step.
///
/// # Example
/// ```
/// # use bitseq::{write_sequence, read_sequence, Sequence};
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("bits.txt");
///
/// let sequence = Sequence::generate();
/// write_sequence(&path, &sequence).unwrap();
/// assert_eq!(read_sequence(&path).unwrap(), sequence);
/// ```
pub fn write_sequence<P: AsRef<Path>>(path: P, sequence: &Sequence) -> Result<()> {
    SequenceFile::create(path)?.write(sequence)
}

/// Reads back a file produced by [`write_sequence`].
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    contents.parse()
}
