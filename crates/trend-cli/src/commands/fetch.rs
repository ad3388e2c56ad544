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

use crate::config::AppConfig;
use anyhow::Result;
use clap::Args;
use tracing::{error, info};
use trend_models::TrendContext;
use trend_sources::{select_top_trend, TrendSourceFactory};

#[derive(Args, Debug)]
pub struct FetchCommand {
  /// Source identifier (coinmarketcap, coingecko, binance)
  #[arg(short, long)]
  source: String,

  /// Print only the strongest trend
  #[arg(long)]
  top: bool,
}

/// Fetch and print trends as JSON.
///
/// Construction errors (unknown source, missing credentials) are returned.
/// A failed fetch is logged and the generic fallback context is printed
/// instead.
pub async fn execute(cmd: FetchCommand, config: &AppConfig) -> Result<()> {
  let source = TrendSourceFactory::create_with_config(&cmd.source, &config.resolver, &config.trend)?;

  let trends = match source.fetch_trends().await {
    Ok(trends) => trends,
    Err(e) => {
      error!(code = e.code(), "Failed to fetch trends from {}: {}", source.provider(), e);
      println!("{}", serde_json::to_string_pretty(&TrendContext::fallback())?);
      return Ok(());
    }
  };

  info!("Fetched {} trends from {}", trends.len(), source.provider().display_name());

  if cmd.top {
    match select_top_trend(&trends, source.score_order()) {
      Some(top) => println!("{}", serde_json::to_string_pretty(top)?),
      None => println!("{}", serde_json::to_string_pretty(&TrendContext::fallback())?),
    }
  } else {
    println!("{}", serde_json::to_string_pretty(&trends)?);
  }

  Ok(())
}
