//! HTTP client capability used by [`HttpComparator`](crate::HttpComparator)

use crate::error::{CompareError, CompareResult};
use reqwest::blocking::{Client, Response};
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// Fetches a URL, failing with [`CompareError::Fetch`]
pub trait HttpClient {
    fn get(&self, url: &str) -> CompareResult<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn get(&self, url: &str) -> CompareResult<HttpResponse> {
        (**self).get(url)
    }
}

/// Response from a fetch, capturing everything we need to compare
///
/// The body is only read by [`HttpResponse::read_text`], which consumes the
/// response.
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn new(
        status: u16,
        headers: BTreeMap<String, String>,
        body: impl Read + 'static,
    ) -> Self {
        Self {
            status,
            headers,
            body: Box::new(body),
        }
    }

    /// Read the whole body as UTF-8 text
    pub fn read_text(mut self) -> CompareResult<String> {
        let mut bytes = Vec::new();
        self.body
            .read_to_end(&mut bytes)
            .map_err(|e| CompareError::BodyRead { source: e.into() })?;
        String::from_utf8(bytes).map_err(|e| CompareError::BodyRead { source: e.into() })
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Blocking [`HttpClient`] backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Create a client; `None` waits on a request for as long as it takes
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn parse_response(response: Response) -> HttpResponse {
        let status = response.status().as_u16();
        let headers = header_map(response.headers());

        HttpResponse::new(status, headers, response)
    }
}

/// Header values are decoded as UTF-8, replacing invalid bytes
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect()
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> CompareResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| CompareError::fetch(url, e))?;

        debug!(url, status = response.status().as_u16(), "fetched");
        Ok(Self::parse_response(response))
    }
}
