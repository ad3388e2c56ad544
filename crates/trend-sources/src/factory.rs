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

//! Construction of trend sources by identifier.

use crate::providers::{BinanceSource, CoinGeckoSource, CoinMarketCapSource};
use crate::traits::TrendSource;
use tracing::{debug, info};
use trend_core::{Config, CredentialsResolver, Result, TrendSourcingError};
use trend_models::ProviderKind;

type Constructor = fn(&CredentialsResolver, &Config) -> Result<Box<dyn TrendSource>>;

/// Identifier to constructor. Adding a provider means adding a row here.
const REGISTRY: [(ProviderKind, Constructor); 3] = [
  (ProviderKind::CoinMarketCap, coinmarketcap),
  (ProviderKind::CoinGecko, coingecko),
  (ProviderKind::Binance, binance),
];

fn coinmarketcap(resolver: &CredentialsResolver, config: &Config) -> Result<Box<dyn TrendSource>> {
  Ok(Box::new(CoinMarketCapSource::new(resolver, config)?))
}

fn coingecko(resolver: &CredentialsResolver, config: &Config) -> Result<Box<dyn TrendSource>> {
  Ok(Box::new(CoinGeckoSource::new(resolver, config)?))
}

fn binance(resolver: &CredentialsResolver, config: &Config) -> Result<Box<dyn TrendSource>> {
  Ok(Box::new(BinanceSource::new(resolver, config)?))
}

pub struct TrendSourceFactory;

impl TrendSourceFactory {
  /// Create a source with default configuration.
  pub fn create(source_type: &str, resolver: &CredentialsResolver) -> Result<Box<dyn TrendSource>> {
    Self::create_with_config(source_type, resolver, &Config::default())
  }

  /// Create a source for `source_type` (case-insensitive).
  ///
  /// Unknown identifiers fail with `UnsupportedSource`. Credential problems
  /// surface here rather than on the first fetch.
  pub fn create_with_config(
    source_type: &str,
    resolver: &CredentialsResolver,
    config: &Config,
  ) -> Result<Box<dyn TrendSource>> {
    let kind = ProviderKind::from_id(source_type)
      .ok_or_else(|| TrendSourcingError::UnsupportedSource(source_type.to_string()))?;

    let (_, constructor) = REGISTRY
      .iter()
      .find(|(registered, _)| *registered == kind)
      .ok_or_else(|| TrendSourcingError::UnsupportedSource(source_type.to_string()))?;

    debug!("Constructing {} trend source", kind.display_name());
    let source = constructor(resolver, config)?;
    info!("Created {} trend source", kind);
    Ok(source)
  }

  /// Identifiers accepted by [`create`](Self::create).
  pub fn supported_sources() -> Vec<&'static str> {
    REGISTRY.iter().map(|(kind, _)| kind.as_str()).collect()
  }
}
