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

//! CoinGecko trending-search adapter.
//!
//! Field mapping from `/api/v3/search/trending` (`coins[].item`):
//!
//! | Native | Canonical |
//! |--------|-----------|
//! | `name` | `name` |
//! | `symbol` | `symbol` |
//! | `data.price` (USD) | `price` |
//! | `data.total_volume` (display string such as `"$1,234.5"`) | `volume` |
//! | `score` (0-based trending position) | `trend_score` (lower is better) |
//!
//! Only the generic schema (`name`, `trend_score`, `volume`) is required.

use crate::traits::TrendSource;
use crate::transport::{endpoint, HttpTransport};
use crate::validation::ensure_valid_batch;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};
use trend_core::{Config, CredentialsResolver, Result, TrendSourcingError};
use trend_models::{ProviderKind, ScoreOrder, TrendField, TrendRecord, GENERIC_SCHEMA};

const TRENDING_PATH: &str = "/api/v3/search/trending";

pub struct CoinGeckoSource {
  base_url: String,
  transport: HttpTransport,
}

#[derive(Debug, Deserialize)]
struct TrendingResponse {
  #[serde(default)]
  coins: Vec<TrendingCoin>,
}

#[derive(Debug, Deserialize)]
struct TrendingCoin {
  item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
  name: Option<String>,
  symbol: Option<String>,
  score: Option<u32>,
  data: Option<TrendingItemData>,
}

#[derive(Debug, Deserialize)]
struct TrendingItemData {
  price: Option<f64>,
  total_volume: Option<String>,
}

impl CoinGeckoSource {
  pub fn new(resolver: &CredentialsResolver, config: &Config) -> Result<Self> {
    // Registry declares no fields, but resolution still runs so an
    // unregistered service surfaces at construction.
    resolver.get_credentials(ProviderKind::CoinGecko.credential_service())?;

    Ok(Self { base_url: config.coingecko_base_url.clone(), transport: HttpTransport::new(config)? })
  }

  fn to_records(coins: Vec<TrendingCoin>) -> Vec<TrendRecord> {
    coins
      .into_iter()
      .map(|coin| {
        let item = coin.item;
        let data = item.data.as_ref();
        TrendRecord::builder()
          .name(item.name)
          .symbol(item.symbol.map(|s| s.to_uppercase()))
          .price(data.and_then(|d| d.price))
          .volume(data.and_then(|d| d.total_volume.as_deref()).and_then(parse_display_amount))
          .trend_score(item.score.map(f64::from))
          .build()
      })
      .collect()
  }
}

/// Parse CoinGecko display amounts like `"$1,234.56"`.
fn parse_display_amount(raw: &str) -> Option<f64> {
  let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',' | ' ')).collect();
  cleaned.parse::<f64>().ok()
}

#[async_trait]
impl TrendSource for CoinGeckoSource {
  #[instrument(skip(self), fields(provider = "coingecko"))]
  async fn fetch_trends(&self) -> Result<Vec<TrendRecord>> {
    info!("Fetching trends from CoinGecko");

    let url = endpoint(&self.base_url, TRENDING_PATH)?;
    let response: TrendingResponse = self.transport.get_json(url, &[]).await.map_err(|e| {
      error!("CoinGecko trend sourcing failed: {}", e);
      TrendSourcingError::unavailable(ProviderKind::CoinGecko.as_str(), e)
    })?;

    debug!("CoinGecko returned {} trending coins", response.coins.len());

    let records = Self::to_records(response.coins);
    let records = ensure_valid_batch(self.provider(), records, self.required_fields())?;

    info!("Successfully processed {} trends from CoinGecko", records.len());
    Ok(records)
  }

  fn provider(&self) -> ProviderKind {
    ProviderKind::CoinGecko
  }

  fn required_fields(&self) -> &'static [TrendField] {
    GENERIC_SCHEMA
  }

  fn score_order(&self) -> ScoreOrder {
    ScoreOrder::LowerIsBetter
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_display_amount() {
    assert_eq!(parse_display_amount("$1,234.5"), Some(1234.5));
    assert_eq!(parse_display_amount("987"), Some(987.0));
    assert_eq!(parse_display_amount("n/a"), None);
  }

  #[test]
  fn test_trending_item_mapping() {
    let response: TrendingResponse = serde_json::from_str(
      r#"{"coins": [{"item": {
          "id": "pepe", "name": "Pepe", "symbol": "pepe", "market_cap_rank": 30,
          "score": 0,
          "data": {"price": 0.0000121, "total_volume": "$812,345,678"}
      }}]}"#,
    )
    .unwrap();

    let records = CoinGeckoSource::to_records(response.coins);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), Some("Pepe"));
    assert_eq!(records[0].symbol(), Some("PEPE"));
    assert_eq!(records[0].volume(), Some(812345678.0));
    assert_eq!(records[0].trend_score(), Some(0.0));
  }

  #[test]
  fn test_constructs_without_credentials() {
    let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
    let source = CoinGeckoSource::new(&resolver, &Config::default()).unwrap();
    assert_eq!(source.required_fields(), GENERIC_SCHEMA);
    assert_eq!(source.score_order(), ScoreOrder::LowerIsBetter);
  }
}
