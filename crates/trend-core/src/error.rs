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

//! Error taxonomy shared by every trend sourcing crate.

use thiserror::Error;

/// Transport-level cause behind a [`TrendSourcingError::SourceUnavailable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
  /// The bounded request timeout elapsed
  #[error("request timed out: {0}")]
  Timeout(String),

  /// Connection, DNS or TLS failure
  #[error("network error: {0}")]
  Network(String),

  /// Provider answered with a non-2xx status
  #[error("HTTP {status}")]
  Status { status: u16 },

  /// Body could not be read or decoded into the provider envelope
  #[error("malformed response body: {0}")]
  MalformedBody(String),

  /// Provider returned a well-formed error envelope
  #[error("provider error: {0}")]
  Provider(String),
}

/// Root of the trend sourcing error hierarchy.
///
/// Every variant is terminal for the operation that produced it. Nothing in
/// the core retries or swallows these; that policy belongs to the caller.
#[derive(Error, Debug)]
pub enum TrendSourcingError {
  /// Credential service identifier is not in the registry
  #[error("No credentials configured for service: {0}")]
  UnknownService(String),

  /// One or more required credential fields resolved empty
  #[error("Missing credentials for {service}: {}", missing.join(", "))]
  IncompleteCredentials { service: String, missing: Vec<String> },

  /// Trend provider identifier is not supported by the factory
  #[error("Unsupported trend source: {0}")]
  UnsupportedSource(String),

  /// Outbound request to a provider failed
  #[error("Trend source {provider} unavailable: {cause}")]
  SourceUnavailable {
    provider: String,
    #[source]
    cause: TransportError,
  },

  /// Provider output failed structural validation
  #[error("Invalid trend data from {provider}: {}", errors.join("; "))]
  InvalidTrendData { provider: String, errors: Vec<String> },

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl TrendSourcingError {
  pub fn unavailable(provider: impl Into<String>, cause: TransportError) -> Self {
    Self::SourceUnavailable { provider: provider.into(), cause }
  }

  /// Stable machine-readable code for logs and CLI output.
  pub const fn code(&self) -> &'static str {
    match self {
      Self::UnknownService(_) => "credentials.unknown_service",
      Self::IncompleteCredentials { .. } => "credentials.incomplete",
      Self::UnsupportedSource(_) => "source.unsupported",
      Self::SourceUnavailable { .. } => "source.unavailable",
      Self::InvalidTrendData { .. } => "source.invalid_data",
      Self::Config(_) => "config.invalid",
    }
  }
}

/// Result type alias for trend-* crates
pub type Result<T> = std::result::Result<T, TrendSourcingError>;

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error as _;

  #[test]
  fn test_incomplete_credentials_lists_field_names() {
    let err = TrendSourcingError::IncompleteCredentials {
      service: "binance".to_string(),
      missing: vec!["api_key".to_string(), "api_secret".to_string()],
    };
    assert_eq!(err.to_string(), "Missing credentials for binance: api_key, api_secret");
    assert_eq!(err.code(), "credentials.incomplete");
  }

  #[test]
  fn test_source_unavailable_exposes_cause() {
    let err = TrendSourcingError::unavailable("coinmarketcap", TransportError::Status { status: 503 });
    assert_eq!(err.to_string(), "Trend source coinmarketcap unavailable: HTTP 503");

    let cause = err.source().expect("cause should be chained");
    assert_eq!(cause.to_string(), "HTTP 503");
  }

  #[test]
  fn test_invalid_trend_data_joins_errors() {
    let err = TrendSourcingError::InvalidTrendData {
      provider: "coingecko".to_string(),
      errors: vec!["a".to_string(), "b".to_string()],
    };
    assert_eq!(err.to_string(), "Invalid trend data from coingecko: a; b");
  }

  #[test]
  fn test_unknown_service_and_unsupported_source_are_distinct() {
    let unknown = TrendSourcingError::UnknownService("kraken".to_string());
    let unsupported = TrendSourcingError::UnsupportedSource("kraken".to_string());
    assert_ne!(unknown.code(), unsupported.code());
    assert!(matches!(unknown, TrendSourcingError::UnknownService(_)));
    assert!(matches!(unsupported, TrendSourcingError::UnsupportedSource(_)));
  }
}
