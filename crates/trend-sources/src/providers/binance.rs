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

//! Binance 24h ticker adapter.
//!
//! `/api/v3/ticker/24hr` returns every trading pair with numbers encoded as
//! strings. Only pairs quoted in the configured quote asset are kept, ranked
//! by quote volume and cut to the listing limit.
//!
//! | Native | Canonical |
//! |--------|-----------|
//! | `symbol` minus quote suffix | `name` |
//! | `symbol` | `symbol` |
//! | `lastPrice` | `price` |
//! | `quoteVolume` | `volume` |
//! | `priceChangePercent` | `trend_score` (higher is better) |

use crate::traits::TrendSource;
use crate::transport::{endpoint, HttpTransport};
use crate::validation::ensure_valid_batch;
use async_trait::async_trait;
use serde::Deserialize;
use std::cmp::Ordering;
use tracing::{debug, error, info, instrument};
use trend_core::{Config, CredentialsResolver, Result, TrendSourcingError};
use trend_models::{ProviderKind, ScoreOrder, TrendField, TrendRecord, RANKING_SCHEMA};

const TICKER_PATH: &str = "/api/v3/ticker/24hr";

pub struct BinanceSource {
  api_key: String,
  base_url: String,
  quote_asset: String,
  limit: usize,
  transport: HttpTransport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ticker24h {
  symbol: String,
  last_price: Option<String>,
  quote_volume: Option<String>,
  price_change_percent: Option<String>,
}

impl BinanceSource {
  /// Resolves both `api_key` and `api_secret`. Only the key is sent; the
  /// public ticker endpoint needs no signature.
  pub fn new(resolver: &CredentialsResolver, config: &Config) -> Result<Self> {
    let credentials = resolver.get_credentials(ProviderKind::Binance.credential_service())?;
    let api_key = credentials.require("api_key")?.to_string();
    credentials.require("api_secret")?;

    Ok(Self {
      api_key,
      base_url: config.binance_base_url.clone(),
      quote_asset: config.quote_asset.trim().to_uppercase(),
      limit: config.listing_limit as usize,
      transport: HttpTransport::new(config)?,
    })
  }

  fn to_records(&self, tickers: Vec<Ticker24h>) -> Vec<TrendRecord> {
    let mut quoted: Vec<(Option<f64>, TrendRecord)> = tickers
      .into_iter()
      .filter_map(|ticker| {
        let base = ticker.symbol.strip_suffix(&self.quote_asset)?;
        if base.is_empty() {
          return None;
        }
        let volume = parse_decimal(ticker.quote_volume.as_deref());
        let record = TrendRecord::builder()
          .name(base.to_string())
          .symbol(ticker.symbol.clone())
          .price(parse_decimal(ticker.last_price.as_deref()))
          .volume(volume)
          .trend_score(parse_decimal(ticker.price_change_percent.as_deref()))
          .build();
        Some((volume, record))
      })
      .collect();

    // Highest quote volume first; unparseable volumes sink to the end.
    quoted.sort_by(|(a, _), (b, _)| match (a, b) {
      (Some(a), Some(b)) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    });
    quoted.truncate(self.limit);

    quoted.into_iter().map(|(_, record)| record).collect()
  }
}

fn parse_decimal(raw: Option<&str>) -> Option<f64> {
  raw.and_then(|s| s.trim().parse::<f64>().ok())
}

#[async_trait]
impl TrendSource for BinanceSource {
  #[instrument(skip(self), fields(provider = "binance"))]
  async fn fetch_trends(&self) -> Result<Vec<TrendRecord>> {
    info!("Fetching {} trends from Binance", self.quote_asset);

    let url = endpoint(&self.base_url, TICKER_PATH)?;
    let tickers: Vec<Ticker24h> = self
      .transport
      .get_json(url, &[("X-MBX-APIKEY", self.api_key.as_str())])
      .await
      .map_err(|e| {
        error!("Binance trend sourcing failed: {}", e);
        TrendSourcingError::unavailable(ProviderKind::Binance.as_str(), e)
      })?;

    debug!("Binance returned {} tickers", tickers.len());

    let records = self.to_records(tickers);
    let records = ensure_valid_batch(self.provider(), records, self.required_fields())?;

    info!("Successfully processed {} trends from Binance", records.len());
    Ok(records)
  }

  fn provider(&self) -> ProviderKind {
    ProviderKind::Binance
  }

  fn required_fields(&self) -> &'static [TrendField] {
    RANKING_SCHEMA
  }

  /// 24h percent change; the biggest mover wins.
  fn score_order(&self) -> ScoreOrder {
    ScoreOrder::HigherIsBetter
  }
}
