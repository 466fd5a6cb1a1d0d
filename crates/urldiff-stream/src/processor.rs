//! Running a comparator over a sequence of pairs

use crate::pairs::Pair;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};
use urldiff_compare::Comparator;

/// Result of one comparison attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Equal,
    NotEqual,
    /// The comparator failed, so equality is unknown
    Undetermined,
}

impl From<bool> for Outcome {
    fn from(equal: bool) -> Self {
        if equal {
            Outcome::Equal
        } else {
            Outcome::NotEqual
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Equal => write!(f, "equal"),
            Outcome::NotEqual => write!(f, "not equal"),
            Outcome::Undetermined => write!(f, "undetermined"),
        }
    }
}

/// A pair together with the outcome of comparing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    pub outcome: Outcome,
}

/// Compares each pair of a sequence with a fixed comparator
///
/// Comparator errors never end the sequence; they become
/// [`Outcome::Undetermined`] for the pair that caused them.
pub struct ComparisonProcessor {
    comparator: Box<dyn Comparator>,
}

impl ComparisonProcessor {
    pub fn new(comparator: impl Comparator + 'static) -> Self {
        Self {
            comparator: Box::new(comparator),
        }
    }

    /// Compare a single pair
    pub fn compare(&self, pair: Pair) -> Comparison {
        let left = Value::String(pair.left);
        let right = Value::String(pair.right);

        let outcome = match self.comparator.equals(&left, &right) {
            Ok(equal) => Outcome::from(equal),
            Err(e) => {
                warn!(left = %left, right = %right, error = %e, "comparison failed");
                Outcome::Undetermined
            }
        };
        debug!(left = %left, right = %right, %outcome, "compared");

        Comparison {
            left: into_string(left),
            right: into_string(right),
            outcome,
        }
    }

    /// Lazily compare every pair of `pairs`
    pub fn run<'a, I>(&'a self, pairs: I) -> impl Iterator<Item = Comparison> + 'a
    where
        I: IntoIterator,
        I::Item: Into<Pair>,
        I::IntoIter: 'a,
    {
        pairs.into_iter().map(move |pair| self.compare(pair.into()))
    }

    /// Like [`run`](Self::run) for producers that can fail
    ///
    /// Producer errors are passed through untouched so the caller can decide
    /// whether to stop.
    pub fn try_run<'a, I, E>(&'a self, pairs: I) -> impl Iterator<Item = Result<Comparison, E>> + 'a
    where
        I: IntoIterator<Item = Result<Pair, E>>,
        I::IntoIter: 'a,
    {
        pairs
            .into_iter()
            .map(move |pair| pair.map(|pair| self.compare(pair)))
    }
}

fn into_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
