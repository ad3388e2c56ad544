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

//! Configuration management for trend sourcing

use crate::error::{Result, TrendSourcingError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Runtime settings shared by all provider adapters.
///
/// Passed explicitly into adapter construction; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Number of ranked entries requested from listing endpoints
  pub listing_limit: u32,

  /// Quote currency for CoinMarketCap listings
  pub convert: String,

  /// Quote asset used to select Binance pairs
  pub quote_asset: String,

  /// Base URL for the CoinMarketCap API
  pub coinmarketcap_base_url: String,

  /// Base URL for the CoinGecko API
  pub coingecko_base_url: String,

  /// Base URL for the Binance API
  pub binance_base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      listing_limit: crate::DEFAULT_LISTING_LIMIT,
      convert: "USD".to_string(),
      quote_asset: "USDT".to_string(),
      coinmarketcap_base_url: crate::COINMARKETCAP_BASE_URL.to_string(),
      coingecko_base_url: crate::COINGECKO_BASE_URL.to_string(),
      binance_base_url: crate::BINANCE_BASE_URL.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let defaults = Self::default();

    let timeout_secs = parse_var("TREND_TIMEOUT_SECS", defaults.timeout_secs)?;
    let listing_limit = parse_var("TREND_LISTING_LIMIT", defaults.listing_limit)?;

    let config = Config {
      timeout_secs,
      listing_limit,
      convert: env::var("TREND_CONVERT").unwrap_or(defaults.convert),
      quote_asset: env::var("TREND_QUOTE_ASSET").unwrap_or(defaults.quote_asset),
      coinmarketcap_base_url: env::var("COINMARKETCAP_BASE_URL")
        .unwrap_or(defaults.coinmarketcap_base_url),
      coingecko_base_url: env::var("COINGECKO_BASE_URL").unwrap_or(defaults.coingecko_base_url),
      binance_base_url: env::var("BINANCE_BASE_URL").unwrap_or(defaults.binance_base_url),
    };

    config.validate()?;
    Ok(config)
  }

  /// Check value ranges and base URLs.
  pub fn validate(&self) -> Result<()> {
    if self.timeout_secs == 0 {
      return Err(TrendSourcingError::Config("timeout_secs must be greater than zero".to_string()));
    }

    if !(1..=crate::MAX_LISTING_LIMIT).contains(&self.listing_limit) {
      return Err(TrendSourcingError::Config(format!(
        "listing_limit must be between 1 and {}, got {}",
        crate::MAX_LISTING_LIMIT,
        self.listing_limit
      )));
    }

    if self.convert.trim().is_empty() {
      return Err(TrendSourcingError::Config("convert currency must not be empty".to_string()));
    }

    if self.quote_asset.trim().is_empty() {
      return Err(TrendSourcingError::Config("quote_asset must not be empty".to_string()));
    }

    for (name, value) in [
      ("coinmarketcap_base_url", &self.coinmarketcap_base_url),
      ("coingecko_base_url", &self.coingecko_base_url),
      ("binance_base_url", &self.binance_base_url),
    ] {
      Url::parse(value)
        .map_err(|e| TrendSourcingError::Config(format!("Invalid {}: {}", name, e)))?;
    }

    Ok(())
  }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
  match env::var(name) {
    Ok(raw) => raw.trim().parse().map_err(|_| TrendSourcingError::Config(format!("Invalid {}", name))),
    Err(_) => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.listing_limit, 100);
    assert_eq!(config.convert, "USD");
  }

  #[test]
  fn test_zero_timeout_rejected() {
    let config = Config { timeout_secs: 0, ..Config::default() };
    assert!(matches!(config.validate(), Err(TrendSourcingError::Config(_))));
  }

  #[test]
  fn test_listing_limit_bounds() {
    let too_small = Config { listing_limit: 0, ..Config::default() };
    let too_large = Config { listing_limit: 5001, ..Config::default() };
    let max = Config { listing_limit: 5000, ..Config::default() };

    assert!(too_small.validate().is_err());
    assert!(too_large.validate().is_err());
    assert!(max.validate().is_ok());
  }

  #[test]
  fn test_bad_base_url_rejected() {
    let config = Config { binance_base_url: "not a url".to_string(), ..Config::default() };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("binance_base_url"));
  }
}
