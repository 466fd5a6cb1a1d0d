//! Lazy pairing of lines from two inputs
//!
//! Both pairings open their inputs on the first call to `next` and release
//! every handle once the sequence ends, fails, is closed, or is dropped.

use crate::error::StreamResult;
use crate::source::{FileSystem, LineReader, LineSource};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

/// An ordered pair of raw inputs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl<L: Into<String>, R: Into<String>> From<(L, R)> for Pair {
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

/// Produces pair sequences from two line-oriented inputs
#[derive(Debug, Clone, Default)]
pub struct PairGenerator<S = FileSystem> {
    source: S,
}

impl PairGenerator {
    /// Create a generator reading files from disk
    pub fn new() -> Self {
        Self::with_source(FileSystem)
    }
}

impl<S: LineSource> PairGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Pair line `i` of `a` with line `i` of `b`, stopping at the shorter input
    pub fn zipped(&self, a: impl AsRef<Path>, b: impl AsRef<Path>) -> ZippedPairs<'_> {
        ZippedPairs {
            source: &self.source,
            path_a: a.as_ref().to_path_buf(),
            path_b: b.as_ref().to_path_buf(),
            handles: Handles::Unopened,
        }
    }

    /// Pair every line of `a` with every line of `b`, row-major
    ///
    /// `b` is reopened and read from the start for each line of `a`.
    pub fn cross_product(
        &self,
        a: impl AsRef<Path>,
        b: impl AsRef<Path>,
    ) -> CrossProductPairs<'_> {
        CrossProductPairs {
            source: &self.source,
            path_a: a.as_ref().to_path_buf(),
            path_b: b.as_ref().to_path_buf(),
            outer: Handles::Unopened,
            inner: None,
        }
    }
}

enum Handles<T> {
    Unopened,
    Open(T),
    Closed,
}

/// Index-wise pairing, see [`PairGenerator::zipped`]
pub struct ZippedPairs<'a> {
    source: &'a dyn LineSource,
    path_a: PathBuf,
    path_b: PathBuf,
    handles: Handles<(LineReader, LineReader)>,
}

impl ZippedPairs<'_> {
    /// Release both inputs; the sequence yields nothing afterwards
    pub fn close(&mut self) {
        self.handles = Handles::Closed;
    }

    fn advance(&mut self) -> StreamResult<Option<Pair>> {
        if let Handles::Unopened = self.handles {
            let a = LineReader::open(self.source, &self.path_a)?;
            let b = LineReader::open(self.source, &self.path_b)?;
            self.handles = Handles::Open((a, b));
        }

        let Handles::Open((a, b)) = &mut self.handles else {
            return Ok(None);
        };

        let Some(left) = a.next_line()? else {
            return Ok(None);
        };
        let Some(right) = b.next_line()? else {
            return Ok(None);
        };
        Ok(Some(Pair { left, right }))
    }
}

impl Iterator for ZippedPairs<'_> {
    type Item = StreamResult<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Handles::Closed = self.handles {
            return None;
        }
        match self.advance() {
            Ok(Some(pair)) => Some(Ok(pair)),
            Ok(None) => {
                self.close();
                None
            }
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for ZippedPairs<'_> {}

/// Cross-product pairing, see [`PairGenerator::cross_product`]
pub struct CrossProductPairs<'a> {
    source: &'a dyn LineSource,
    path_a: PathBuf,
    path_b: PathBuf,
    outer: Handles<LineReader>,
    /// Current line of `a` and the pass over `b` it is being paired with
    inner: Option<(String, LineReader)>,
}

impl CrossProductPairs<'_> {
    /// Release both inputs; the sequence yields nothing afterwards
    pub fn close(&mut self) {
        self.inner = None;
        self.outer = Handles::Closed;
    }

    fn advance(&mut self) -> StreamResult<Option<Pair>> {
        if let Handles::Unopened = self.outer {
            self.outer = Handles::Open(LineReader::open(self.source, &self.path_a)?);
        }

        loop {
            if let Some((left, b)) = &mut self.inner {
                if let Some(right) = b.next_line()? {
                    return Ok(Some(Pair {
                        left: left.clone(),
                        right,
                    }));
                }
                self.inner = None;
            }

            let Handles::Open(a) = &mut self.outer else {
                return Ok(None);
            };
            let Some(left) = a.next_line()? else {
                return Ok(None);
            };
            let b = LineReader::open(self.source, &self.path_b)?;
            self.inner = Some((left, b));
        }
    }
}

impl Iterator for CrossProductPairs<'_> {
    type Item = StreamResult<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Handles::Closed = self.outer {
            return None;
        }
        match self.advance() {
            Ok(Some(pair)) => Some(Ok(pair)),
            Ok(None) => {
                self.close();
                None
            }
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for CrossProductPairs<'_> {}
