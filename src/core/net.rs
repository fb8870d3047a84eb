// src/core/net.rs
// Blocking HTTP GET. Everything above this file talks to the `Fetch` trait,
// so tests can serve pages from memory.

use std::time::Duration;

use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body of a 2xx response, `Error::Status` otherwise.
    pub fn into_page(self, url: &str) -> Result<String> {
        if !self.is_success() {
            return Err(Error::Status { url: s!(url), status: self.status });
        }
        Ok(self.body)
    }
}

pub trait Fetch {
    /// One GET. Transport problems are errors; any HTTP status is a `Response`.
    fn get(&self, url: &str) -> Result<Response>;
}

pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport { url: s!("<client>"), source: Box::new(e) })?;
        Ok(Self { inner })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<Response> {
        let transport = |e: reqwest::Error| Error::Transport { url: s!(url), source: Box::new(e) };

        let resp = self.inner.get(url).send().map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport)?;
        debug!(url, status, bytes = body.len(), "fetched");
        Ok(Response { status, body })
    }
}
