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

//! Credential resolution for trend provider APIs.
//!
//! Each known service declares the secret fields it needs and the environment
//! variable that holds each one. Values are resolved on demand and never
//! cached by the resolver.

use crate::error::{Result, TrendSourcingError};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// One required secret and the variable it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialField {
  pub name: &'static str,
  pub env_var: &'static str,
}

/// Registry entry for a credential service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
  pub service: &'static str,
  pub fields: &'static [CredentialField],
}

const SERVICES: &[ServiceDefinition] = &[
  // Public endpoints, no key required
  ServiceDefinition { service: "coingecko", fields: &[] },
  ServiceDefinition {
    service: "coinmarketcap",
    fields: &[CredentialField { name: "api_key", env_var: "COINMARKETCAP_API_KEY" }],
  },
  ServiceDefinition {
    service: "binance",
    fields: &[
      CredentialField { name: "api_key", env_var: "BINANCE_API_KEY" },
      CredentialField { name: "api_secret", env_var: "BINANCE_API_SECRET" },
    ],
  },
];

/// Resolved secrets for one service.
///
/// `Debug` prints field names only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  service: String,
  values: BTreeMap<String, String>,
}

impl Credentials {
  pub fn service(&self) -> &str {
    &self.service
  }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.values.get(field).map(String::as_str)
  }

  /// Fetch a field an adapter cannot work without.
  pub fn require(&self, field: &str) -> Result<&str> {
    self.get(field).ok_or_else(|| TrendSourcingError::IncompleteCredentials {
      service: self.service.clone(),
      missing: vec![field.to_string()],
    })
  }

  pub fn field_names(&self) -> impl Iterator<Item = &str> {
    self.values.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let redacted: BTreeMap<&str, &str> = self.values.keys().map(|k| (k.as_str(), "***")).collect();
    f.debug_struct("Credentials").field("service", &self.service).field("values", &redacted).finish()
  }
}

#[derive(Debug, Clone)]
enum VarSource {
  Process,
  Fixed(HashMap<String, String>),
}

/// Resolves named-service credentials from environment configuration.
///
/// Holds no mutable state, so a single resolver can be shared by every
/// adapter.
#[derive(Debug, Clone)]
pub struct CredentialsResolver {
  source: VarSource,
}

impl Default for CredentialsResolver {
  fn default() -> Self {
    Self::from_process_env()
  }
}

impl CredentialsResolver {
  /// Read variables from the current process environment.
  pub fn from_process_env() -> Self {
    Self { source: VarSource::Process }
  }

  /// Load a dotenv file into the process environment, then read from it.
  pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| {
      TrendSourcingError::Config(format!("Failed to load env file {}: {}", path.display(), e))
    })?;
    Ok(Self::from_process_env())
  }

  /// Read variables from a fixed map instead of the process environment.
  pub fn from_vars<I, K, V>(vars: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    Self { source: VarSource::Fixed(vars) }
  }

  /// Every service the registry knows about.
  pub fn registered_services() -> &'static [ServiceDefinition] {
    SERVICES
  }

  fn lookup(&self, var: &str) -> Option<String> {
    let value = match &self.source {
      VarSource::Process => std::env::var(var).ok(),
      VarSource::Fixed(vars) => vars.get(var).cloned(),
    };
    value.filter(|v| !v.trim().is_empty())
  }

  /// Resolve every required field for `service`.
  ///
  /// Fails with `UnknownService` for an unregistered identifier and with
  /// `IncompleteCredentials` if any required field is missing or empty. A
  /// partially populated result is never returned.
  pub fn get_credentials(&self, service: &str) -> Result<Credentials> {
    let key = service.trim().to_lowercase();
    let entry = SERVICES
      .iter()
      .find(|entry| entry.service == key)
      .ok_or_else(|| TrendSourcingError::UnknownService(service.to_string()))?;

    let mut values = BTreeMap::new();
    let mut missing = Vec::new();

    for field in entry.fields {
      match self.lookup(field.env_var) {
        Some(value) => {
          values.insert(field.name.to_string(), value);
        }
        None => missing.push(field.name.to_string()),
      }
    }

    if !missing.is_empty() {
      debug!("Credentials for {} incomplete, missing {:?}", entry.service, missing);
      return Err(TrendSourcingError::IncompleteCredentials {
        service: entry.service.to_string(),
        missing,
      });
    }

    Ok(Credentials { service: entry.service.to_string(), values })
  }

  /// Same resolution as [`get_credentials`](Self::get_credentials), failures
  /// reported as `false`.
  pub fn validate_credentials(&self, service: &str) -> bool {
    self.get_credentials(service).is_ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolves_coinmarketcap_key() {
    let resolver = CredentialsResolver::from_vars([("COINMARKETCAP_API_KEY", "cmc-key")]);
    let creds = resolver.get_credentials("coinmarketcap").unwrap();
    assert_eq!(creds.service(), "coinmarketcap");
    assert_eq!(creds.get("api_key"), Some("cmc-key"));
    assert_eq!(creds.len(), 1);
  }

  #[test]
  fn test_service_lookup_is_case_insensitive() {
    let resolver = CredentialsResolver::from_vars([("COINMARKETCAP_API_KEY", "cmc-key")]);
    assert!(resolver.get_credentials("CoinMarketCap").is_ok());
    assert!(resolver.get_credentials(" COINMARKETCAP ").is_ok());
  }

  #[test]
  fn test_unknown_service() {
    let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
    let err = resolver.get_credentials("kraken").unwrap_err();
    assert!(matches!(err, TrendSourcingError::UnknownService(ref s) if s == "kraken"));
  }

  #[test]
  fn test_partial_binance_credentials_rejected() {
    let resolver = CredentialsResolver::from_vars([("BINANCE_API_KEY", "key")]);
    match resolver.get_credentials("binance") {
      Err(TrendSourcingError::IncompleteCredentials { service, missing }) => {
        assert_eq!(service, "binance");
        assert_eq!(missing, vec!["api_secret".to_string()]);
      }
      other => panic!("Expected IncompleteCredentials, got {:?}", other),
    }
  }

  #[test]
  fn test_empty_and_blank_values_count_as_missing() {
    let resolver =
      CredentialsResolver::from_vars([("BINANCE_API_KEY", ""), ("BINANCE_API_SECRET", "   ")]);
    match resolver.get_credentials("binance") {
      Err(TrendSourcingError::IncompleteCredentials { missing, .. }) => {
        assert_eq!(missing.len(), 2);
      }
      other => panic!("Expected IncompleteCredentials, got {:?}", other),
    }
  }

  #[test]
  fn test_service_without_fields_resolves_empty() {
    let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
    let creds = resolver.get_credentials("coingecko").unwrap();
    assert!(creds.is_empty());
  }

  #[test]
  fn test_every_registered_service_is_all_or_nothing() {
    let full = CredentialsResolver::from_vars([
      ("COINMARKETCAP_API_KEY", "a"),
      ("BINANCE_API_KEY", "b"),
      ("BINANCE_API_SECRET", "c"),
    ]);
    let empty = CredentialsResolver::from_vars(Vec::<(String, String)>::new());

    for entry in CredentialsResolver::registered_services() {
      let creds = full.get_credentials(entry.service).unwrap();
      assert_eq!(creds.len(), entry.fields.len());
      assert!(creds.field_names().all(|name| creds.get(name).is_some_and(|v| !v.is_empty())));

      match empty.get_credentials(entry.service) {
        Ok(creds) => assert!(entry.fields.is_empty() && creds.is_empty()),
        Err(TrendSourcingError::IncompleteCredentials { missing, .. }) => {
          assert_eq!(missing.len(), entry.fields.len())
        }
        Err(other) => panic!("Unexpected error {:?}", other),
      }
    }
  }

  #[test]
  fn test_validate_credentials_returns_bool() {
    let resolver = CredentialsResolver::from_vars([("COINMARKETCAP_API_KEY", "cmc-key")]);
    assert!(resolver.validate_credentials("coinmarketcap"));
    assert!(!resolver.validate_credentials("binance"));
    assert!(!resolver.validate_credentials("unknown"));
  }

  #[test]
  fn test_debug_output_redacts_values() {
    let resolver = CredentialsResolver::from_vars([("COINMARKETCAP_API_KEY", "super-secret")]);
    let creds = resolver.get_credentials("coinmarketcap").unwrap();
    let debug = format!("{:?}", creds);
    assert!(debug.contains("api_key"));
    assert!(!debug.contains("super-secret"));
  }

  #[test]
  fn test_require_reports_missing_field() {
    let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
    let creds = resolver.get_credentials("coingecko").unwrap();
    assert!(matches!(
      creds.require("api_key"),
      Err(TrendSourcingError::IncompleteCredentials { .. })
    ));
  }
}
