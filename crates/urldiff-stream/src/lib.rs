//! Input pairing and comparison processing
//!
//! [`PairGenerator`] lazily pairs lines from two files, either by index or as
//! a full cross product. [`ComparisonProcessor`] runs a comparator over any
//! sequence of pairs and yields one [`Comparison`] per pair, turning
//! comparator failures into [`Outcome::Undetermined`].
//!
//! ```ignore
//! use urldiff_stream::{ComparisonProcessor, PairGenerator};
//!
//! let generator = PairGenerator::new();
//! let processor = ComparisonProcessor::new(comparator);
//! for result in processor.try_run(generator.cross_product("a.txt", "b.txt")) {
//!     let comparison = result?;
//!     println!("{} {:?} {}", comparison.left, comparison.outcome, comparison.right);
//! }
//! ```

mod error;
mod pairs;
mod processor;
mod source;

pub use error::{StreamError, StreamResult};
pub use pairs::{CrossProductPairs, Pair, PairGenerator, ZippedPairs};
pub use processor::{Comparison, ComparisonProcessor, Outcome};
pub use source::{FileSystem, LineSource};
