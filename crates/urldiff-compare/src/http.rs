//! Comparison of live HTTP endpoint responses

use crate::client::HttpClient;
use crate::comparator::{Comparator, EqualityComparator};
use crate::error::{CompareError, CompareResult};
use crate::json::JsonComparator;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Fetches two URLs and compares status, headers and body
///
/// Status codes must match exactly. Headers are compared as a JSON object
/// when enabled, and bodies are handed to the body comparator as strings.
/// A mismatch in status or headers returns before either body is read.
pub struct HttpComparator {
    client: Box<dyn HttpClient>,
    check_headers: bool,
    body_comparator: Box<dyn Comparator>,
    header_comparator: Box<dyn Comparator>,
}

impl HttpComparator {
    /// Create a comparator that checks headers and compares bodies as JSON
    pub fn new(client: impl HttpClient + 'static) -> Self {
        Self {
            client: Box::new(client),
            check_headers: true,
            body_comparator: Box::new(JsonComparator::new()),
            header_comparator: Box::new(EqualityComparator::new()),
        }
    }

    /// Whether header maps must be equal
    pub fn check_headers(mut self, check: bool) -> Self {
        self.check_headers = check;
        self
    }

    pub fn body_comparator(mut self, cmp: impl Comparator + 'static) -> Self {
        self.body_comparator = Box::new(cmp);
        self
    }

    pub fn header_comparator(mut self, cmp: impl Comparator + 'static) -> Self {
        self.header_comparator = Box::new(cmp);
        self
    }
}

impl Comparator for HttpComparator {
    fn equals(&self, a: &Value, b: &Value) -> CompareResult<bool> {
        let a_url = url_str(a)?;
        let b_url = url_str(b)?;

        let a_response = self.client.get(a_url)?;
        let b_response = self.client.get(b_url)?;

        if a_response.status != b_response.status {
            debug!(
                a = a_url,
                b = b_url,
                a_status = a_response.status,
                b_status = b_response.status,
                "status differs"
            );
            return Ok(false);
        }

        if self.check_headers {
            let a_headers = headers_value(&a_response.headers);
            let b_headers = headers_value(&b_response.headers);
            if !self.header_comparator.equals(&a_headers, &b_headers)? {
                debug!(a = a_url, b = b_url, "headers differ");
                return Ok(false);
            }
        }

        // Both reads are attempted before an error from either is raised
        let a_body = a_response.read_text();
        let b_body = b_response.read_text();
        let (a_body, b_body) = (a_body?, b_body?);

        self.body_comparator
            .equals(&Value::String(a_body), &Value::String(b_body))
    }
}

fn url_str(value: &Value) -> CompareResult<&str> {
    match value {
        Value::String(s) => Ok(s),
        Value::Null => Err(CompareError::invalid_input(
            "expected a URL string, got nothing",
        )),
        other => Err(CompareError::invalid_input(format!(
            "expected a URL string, got {other}"
        ))),
    }
}

fn headers_value(headers: &BTreeMap<String, String>) -> Value {
    Value::Object(
        headers
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect::<Map<_, _>>(),
    )
}
