// src/core/net.rs
//
// Form POST over HTTP. The pipeline only ever sees the `Transport` trait, so
// tests can script responses without a socket.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::TransportError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool { self.status == 200 }
}

/// One request, no retries. A non-200 status is a response, not an error.
pub trait Transport {
    fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, form: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let resp = self.client.post(url).form(form).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        logd!("POST {url} {form:?} -> {status} ({} bytes)", body.len());
        Ok(HttpResponse { status, body })
    }
}
