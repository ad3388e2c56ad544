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

//! CoinMarketCap listings adapter.
//!
//! Field mapping from `/v1/cryptocurrency/listings/latest`:
//!
//! | Native | Canonical |
//! |--------|-----------|
//! | `name` | `name` |
//! | `symbol` | `symbol` |
//! | `quote.<convert>.price` | `price` |
//! | `quote.<convert>.volume_24h` | `volume` |
//! | `cmc_rank` | `trend_score` (rank, lower is better) |

use crate::traits::TrendSource;
use crate::transport::{endpoint, HttpTransport};
use crate::validation::ensure_valid_batch;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info, instrument};
use trend_core::{Config, CredentialsResolver, Result, TransportError, TrendSourcingError};
use trend_models::{ProviderKind, ScoreOrder, TrendField, TrendRecord, RANKING_SCHEMA};

const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

pub struct CoinMarketCapSource {
  api_key: String,
  base_url: String,
  limit: u32,
  convert: String,
  transport: HttpTransport,
}

#[derive(Debug, Deserialize)]
struct CmcResponse {
  status: Option<CmcStatus>,
  #[serde(default)]
  data: Vec<CmcCryptocurrency>,
}

#[derive(Debug, Deserialize)]
struct CmcStatus {
  #[serde(default)]
  error_code: i32,
  error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CmcCryptocurrency {
  name: Option<String>,
  symbol: Option<String>,
  cmc_rank: Option<u32>,
  #[serde(default)]
  quote: HashMap<String, CmcQuote>,
}

#[derive(Debug, Deserialize)]
struct CmcQuote {
  price: Option<f64>,
  volume_24h: Option<f64>,
}

impl CoinMarketCapSource {
  /// Resolve the API key now; construction fails if it is missing.
  pub fn new(resolver: &CredentialsResolver, config: &Config) -> Result<Self> {
    let credentials = resolver.get_credentials(ProviderKind::CoinMarketCap.credential_service())?;
    let api_key = credentials.require("api_key")?.to_string();

    Ok(Self {
      api_key,
      base_url: config.coinmarketcap_base_url.clone(),
      limit: config.listing_limit,
      convert: config.convert.trim().to_uppercase(),
      transport: HttpTransport::new(config)?,
    })
  }

  fn unavailable(&self, cause: TransportError) -> TrendSourcingError {
    error!("CoinMarketCap trend sourcing failed: {}", cause);
    TrendSourcingError::unavailable(ProviderKind::CoinMarketCap.as_str(), cause)
  }

  fn to_records(&self, data: Vec<CmcCryptocurrency>) -> Vec<TrendRecord> {
    data
      .into_iter()
      .map(|crypto| {
        let quote = crypto.quote.get(&self.convert);
        TrendRecord::builder()
          .name(crypto.name)
          .symbol(crypto.symbol)
          .price(quote.and_then(|q| q.price))
          .volume(quote.and_then(|q| q.volume_24h))
          .trend_score(crypto.cmc_rank.map(f64::from))
          .build()
      })
      .collect()
  }
}

#[async_trait]
impl TrendSource for CoinMarketCapSource {
  #[instrument(skip(self), fields(provider = "coinmarketcap"))]
  async fn fetch_trends(&self) -> Result<Vec<TrendRecord>> {
    info!("Fetching trends from CoinMarketCap");

    let mut url = endpoint(&self.base_url, LISTINGS_PATH)?;
    url
      .query_pairs_mut()
      .append_pair("start", "1")
      .append_pair("limit", &self.limit.to_string())
      .append_pair("convert", &self.convert);

    let response: CmcResponse = self
      .transport
      .get_json(url, &[("X-CMC_PRO_API_KEY", self.api_key.as_str())])
      .await
      .map_err(|e| self.unavailable(e))?;

    if let Some(status) = response.status.as_ref().filter(|s| s.error_code != 0) {
      let message = status
        .error_message
        .clone()
        .unwrap_or_else(|| format!("error code {}", status.error_code));
      return Err(self.unavailable(TransportError::Provider(message)));
    }

    debug!("CoinMarketCap returned {} cryptocurrencies", response.data.len());

    let records = self.to_records(response.data);
    let records = ensure_valid_batch(self.provider(), records, self.required_fields())?;

    info!("Successfully processed {} trends from CoinMarketCap", records.len());
    Ok(records)
  }

  fn provider(&self) -> ProviderKind {
    ProviderKind::CoinMarketCap
  }

  fn required_fields(&self) -> &'static [TrendField] {
    RANKING_SCHEMA
  }

  /// `cmc_rank` is a market-cap rank; 1 is the strongest.
  fn score_order(&self) -> ScoreOrder {
    ScoreOrder::LowerIsBetter
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn source() -> CoinMarketCapSource {
    let resolver = CredentialsResolver::from_vars([("COINMARKETCAP_API_KEY", "test_key")]);
    CoinMarketCapSource::new(&resolver, &Config::default()).unwrap()
  }

  #[test]
  fn test_construction_requires_api_key() {
    let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
    let result = CoinMarketCapSource::new(&resolver, &Config::default());
    assert!(matches!(result, Err(TrendSourcingError::IncompleteCredentials { .. })));
  }

  #[test]
  fn test_coinmarketcap_response_parsing() {
    let json_response = r#"{
            "status": {
                "timestamp": "2025-08-14T10:00:00.000Z",
                "error_code": 0,
                "error_message": null,
                "elapsed": 10,
                "credit_count": 1,
                "notice": null
            },
            "data": [
                {
                    "id": 1,
                    "name": "Bitcoin",
                    "symbol": "BTC",
                    "slug": "bitcoin",
                    "cmc_rank": 1,
                    "quote": {
                        "USD": {
                            "price": 45000,
                            "volume_24h": 20000000000,
                            "percent_change_24h": 2.5
                        }
                    }
                }
            ]
        }"#;

    let response: CmcResponse = serde_json::from_str(json_response).unwrap();
    let records = source().to_records(response.data);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), Some("Bitcoin"));
    assert_eq!(records[0].symbol(), Some("BTC"));
    assert_eq!(records[0].price(), Some(45000.0));
    assert_eq!(records[0].volume(), Some(20000000000.0));
    assert_eq!(records[0].trend_score(), Some(1.0));
  }

  #[test]
  fn test_quote_in_other_currency_leaves_market_fields_empty() {
    let response: CmcResponse = serde_json::from_str(
      r#"{"data": [{"name": "Ether", "symbol": "ETH", "cmc_rank": 2,
          "quote": {"EUR": {"price": 2000.0, "volume_24h": 1.0}}}]}"#,
    )
    .unwrap();
    let records = source().to_records(response.data);
    assert_eq!(records[0].price(), None);
    assert_eq!(records[0].volume(), None);
  }

  #[test]
  fn test_declares_ranking_schema_and_rank_order() {
    let source = source();
    assert_eq!(source.provider(), ProviderKind::CoinMarketCap);
    assert_eq!(source.required_fields(), RANKING_SCHEMA);
    assert_eq!(source.score_order(), ScoreOrder::LowerIsBetter);
  }
}
