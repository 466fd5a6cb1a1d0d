//! Result lines written to stdout

use std::io::{self, Write};
use urldiff_stream::{Comparison, Outcome};

/// Counts of each outcome seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub equal: usize,
    pub not_equal: usize,
    pub undetermined: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.equal + self.not_equal + self.undetermined
    }
}

/// Writes one line per comparison
pub struct Reporter<W: Write> {
    out: W,
    tally: Tally,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tally: Tally::default(),
        }
    }

    pub fn report(&mut self, comparison: &Comparison) -> io::Result<()> {
        let Comparison {
            left: a,
            right: b,
            outcome,
        } = comparison;

        match outcome {
            Outcome::Equal => {
                self.tally.equal += 1;
                writeln!(self.out, "{a} equals {b}")
            }
            Outcome::NotEqual => {
                self.tally.not_equal += 1;
                writeln!(self.out, "{a} not equals {b}")
            }
            Outcome::Undetermined => {
                self.tally.undetermined += 1;
                writeln!(self.out, "Error comparing {a} and {b}")
            }
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
