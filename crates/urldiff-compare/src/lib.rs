//! Comparators for checking two inputs for semantic equality
//!
//! Comparators are layered by delegation, each one decoding its inputs a
//! little further before handing them to the next:
//!
//! ```text
//! ┌────────────────┐  bodies   ┌────────────────┐  decoded  ┌────────────────────┐
//! │ HttpComparator │──────────►│ JsonComparator │──────────►│ EqualityComparator │
//! │ status/headers │           │ parse strings  │           │ deep equality      │
//! └────────────────┘           └────────────────┘           └────────────────────┘
//! ```
//!
//! All comparators take [`serde_json::Value`] inputs, with `Value::Null`
//! standing in for an absent value.
//!
//! # Example
//!
//! ```ignore
//! use urldiff_compare::{Comparator, HttpComparator, ReqwestClient};
//! use serde_json::json;
//!
//! let cmp = HttpComparator::new(ReqwestClient::new(None)?).check_headers(false);
//! let same = cmp.equals(&json!("http://a/api"), &json!("http://b/api"))?;
//! ```

mod client;
mod comparator;
mod error;
mod http;
mod json;

pub use client::{HttpClient, HttpResponse, ReqwestClient};
pub use comparator::{Comparator, EqualityComparator};
pub use error::{CompareError, CompareResult};
pub use http::HttpComparator;
pub use json::JsonComparator;

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
