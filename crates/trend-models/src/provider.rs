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

//! Trend provider identifiers and score conventions.

use serde::{Deserialize, Serialize};

/// Supported trend providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
  CoinMarketCap,
  CoinGecko,
  Binance,
}

impl ProviderKind {
  pub const ALL: [Self; 3] = [Self::CoinMarketCap, Self::CoinGecko, Self::Binance];

  /// Identifier used by the source factory.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::CoinMarketCap => "coinmarketcap",
      Self::CoinGecko => "coingecko",
      Self::Binance => "binance",
    }
  }

  /// Credential service this provider resolves at construction time.
  ///
  /// Happens to share the provider identifier today, but the two registries
  /// are separate.
  pub const fn credential_service(self) -> &'static str {
    match self {
      Self::CoinMarketCap => "coinmarketcap",
      Self::CoinGecko => "coingecko",
      Self::Binance => "binance",
    }
  }

  pub const fn display_name(self) -> &'static str {
    match self {
      Self::CoinMarketCap => "CoinMarketCap",
      Self::CoinGecko => "CoinGecko",
      Self::Binance => "Binance",
    }
  }

  /// Case-insensitive lookup.
  pub fn from_id(value: &str) -> Option<Self> {
    let value = value.trim().to_lowercase();
    Self::ALL.into_iter().find(|kind| kind.as_str() == value)
  }
}

impl std::fmt::Display for ProviderKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Direction of a provider's `trend_score`.
///
/// Providers disagree: rank-style scores put the strongest trend at the
/// smallest value, relevance-style scores at the largest. No normalization is
/// applied across providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrder {
  LowerIsBetter,
  HigherIsBetter,
}

impl ScoreOrder {
  /// True when `candidate` ranks ahead of `current`.
  pub fn prefers(self, candidate: f64, current: f64) -> bool {
    match self {
      Self::LowerIsBetter => candidate < current,
      Self::HigherIsBetter => candidate > current,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::LowerIsBetter => "lower_is_better",
      Self::HigherIsBetter => "higher_is_better",
    }
  }
}
