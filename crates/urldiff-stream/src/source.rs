//! Line-oriented input sources

use crate::error::{StreamError, StreamResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Opens a named input for line-by-line reading
///
/// The returned reader owns the underlying handle; dropping it releases the
/// handle.
pub trait LineSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>>;
}

impl<S: LineSource + ?Sized> LineSource for &S {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        (**self).open(path)
    }
}

/// Reads lines from files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl LineSource for FileSystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// An open input yielding trimmed lines
pub(crate) struct LineReader {
    path: PathBuf,
    lines: io::Lines<Box<dyn BufRead>>,
}

impl LineReader {
    pub(crate) fn open(source: &dyn LineSource, path: &Path) -> StreamResult<Self> {
        trace!(path = %path.display(), "opening");
        let reader = source.open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: reader.lines(),
        })
    }

    /// Next line with surrounding whitespace removed
    pub(crate) fn next_line(&mut self) -> StreamResult<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(line)) => Ok(Some(line.trim().to_string())),
            Some(Err(source)) => Err(StreamError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
