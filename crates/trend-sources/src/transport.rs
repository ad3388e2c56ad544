/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport used by provider adapters.
//!
//! One request per call, no retries. Every failure is translated into a
//! [`TransportError`] so `reqwest` types stay inside this crate.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};
use trend_core::{Config, Result, TransportError, TrendSourcingError};
use url::Url;

const USER_AGENT: &str = concat!("trend-sources/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt carried into a parse error.
const BODY_EXCERPT: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: Client,
  timeout: Duration,
}

impl HttpTransport {
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| TrendSourcingError::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  /// Issue a single GET and decode the JSON body into `T`.
  pub async fn get_json<T>(
    &self,
    url: Url,
    headers: &[(&str, &str)],
  ) -> std::result::Result<T, TransportError>
  where
    T: DeserializeOwned,
  {
    debug!("GET {}", redact_query(&url));

    let mut request = self.client.get(url.clone()).header("Accept", "application/json");
    for (name, value) in headers {
      request = request.header(*name, *value);
    }

    let response = request.send().await.map_err(classify)?;
    let status = response.status();

    if !status.is_success() {
      error!("Request to {} failed with status: {}", url.path(), status);
      return Err(TransportError::Status { status: status.as_u16() });
    }

    let text = response.text().await.map_err(classify)?;

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<T>(&text).map_err(|e| {
      let excerpt: String = text.chars().take(BODY_EXCERPT).collect();
      TransportError::MalformedBody(format!("{} (body: {})", e, excerpt))
    })
  }
}

fn classify(err: reqwest::Error) -> TransportError {
  if err.is_timeout() {
    TransportError::Timeout(err.to_string())
  } else if err.is_decode() || err.is_body() {
    TransportError::MalformedBody(err.to_string())
  } else {
    TransportError::Network(err.to_string())
  }
}

/// Path only; query strings may carry provider parameters we do not want in logs.
fn redact_query(url: &Url) -> String {
  format!("{}://{}{}", url.scheme(), url.host_str().unwrap_or_default(), url.path())
}

/// Join an endpoint path onto a configured base URL.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
  let base = Url::parse(base_url)
    .map_err(|e| TrendSourcingError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
  let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'));
  Url::parse(&joined)
    .map_err(|e| TrendSourcingError::Config(format!("Invalid endpoint {}: {}", joined, e)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_joins_without_double_slash() {
    let url = endpoint("https://api.example.com/", "/v1/listings").unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/v1/listings");

    let url = endpoint("http://127.0.0.1:8080", "api/v3/search/trending").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v3/search/trending");
  }

  #[test]
  fn test_endpoint_rejects_bad_base() {
    assert!(matches!(endpoint("::nope::", "/x"), Err(TrendSourcingError::Config(_))));
  }

  #[test]
  fn test_redact_query_drops_parameters() {
    let url = Url::parse("https://api.example.com/v1/listings?start=1&limit=5").unwrap();
    assert_eq!(redact_query(&url), "https://api.example.com/v1/listings");
  }

  #[tokio::test]
  async fn test_stalled_body_is_timeout() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();
      let mut buf = [0u8; 1024];
      let _ = socket.read(&mut buf).await;
      // Headers promise more body than is ever sent
      socket
        .write_all(
          b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{\"coins\":",
        )
        .await
        .unwrap();
      tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = Config { timeout_secs: 1, ..Config::default() };
    let transport = HttpTransport::new(&config).unwrap();
    let url = Url::parse(&format!("http://{}/stall", addr)).unwrap();

    let err = transport.get_json::<serde_json::Value>(url, &[]).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout(_)), "got {:?}", err);
  }

  #[test]
  fn test_transport_uses_configured_timeout() {
    let config = Config { timeout_secs: 3, ..Config::default() };
    let transport = HttpTransport::new(&config).unwrap();
    assert_eq!(transport.timeout(), Duration::from_secs(3));
  }
}
