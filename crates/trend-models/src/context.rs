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

//! Author-facing trend context handed to the content templating layer.

use serde::{Deserialize, Serialize};

/// Closed set of market sentiments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
  Bullish,
  Bearish,
  Neutral,
}

impl MarketSentiment {
  pub const ALL: [Self; 3] = [Self::Bullish, Self::Bearish, Self::Neutral];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Bullish => "bullish",
      Self::Bearish => "bearish",
      Self::Neutral => "neutral",
    }
  }

  /// Case-insensitive match, surrounding whitespace ignored.
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim().to_lowercase();
    Self::ALL.into_iter().find(|s| s.as_str() == value)
  }
}

impl std::fmt::Display for MarketSentiment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A selected trend described for content generation.
///
/// Only produced by the validator's sanitization path (or
/// [`TrendContext::fallback`]), so every instance is already clean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendContext {
  pub topic: String,
  pub source: String,
  /// 0 to 100, two decimal places
  pub relevance_score: f64,
  pub market_sentiment: MarketSentiment,
}

impl TrendContext {
  /// Generic context used when no trend could be sourced or none qualified.
  pub fn fallback() -> Self {
    Self {
      topic: "Crypto Market Overview".to_string(),
      source: "Internal".to_string(),
      relevance_score: 0.0,
      market_sentiment: MarketSentiment::Neutral,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sentiment_parse_is_case_insensitive() {
    assert_eq!(MarketSentiment::parse("BULLISH"), Some(MarketSentiment::Bullish));
    assert_eq!(MarketSentiment::parse(" Bearish "), Some(MarketSentiment::Bearish));
    assert_eq!(MarketSentiment::parse("neutral"), Some(MarketSentiment::Neutral));
    assert_eq!(MarketSentiment::parse("Unknown"), None);
  }

  #[test]
  fn test_context_serializes_lowercase_sentiment() {
    let ctx = TrendContext {
      topic: "Bitcoin Price Surge".to_string(),
      source: "CoinDesk".to_string(),
      relevance_score: 85.5,
      market_sentiment: MarketSentiment::Bullish,
    };
    let value = serde_json::to_value(&ctx).unwrap();
    assert_eq!(value["market_sentiment"], "bullish");
    assert_eq!(value["relevance_score"], 85.5);
  }

  #[test]
  fn test_fallback_is_neutral_overview() {
    let ctx = TrendContext::fallback();
    assert_eq!(ctx.topic, "Crypto Market Overview");
    assert_eq!(ctx.market_sentiment, MarketSentiment::Neutral);
  }
}
