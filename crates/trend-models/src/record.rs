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

//! Canonical trend record exchanged between adapters, the validator and
//! downstream consumers.

use serde::{Deserialize, Serialize};

/// Canonical field identifiers used by required-field schemas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendField {
  Name,
  Symbol,
  Price,
  Volume,
  TrendScore,
}

impl TrendField {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Name => "name",
      Self::Symbol => "symbol",
      Self::Price => "price",
      Self::Volume => "volume",
      Self::TrendScore => "trend_score",
    }
  }
}

impl std::fmt::Display for TrendField {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Schema for ranking providers that report full market data.
pub const RANKING_SCHEMA: &[TrendField] = &[
  TrendField::Name,
  TrendField::Symbol,
  TrendField::Price,
  TrendField::Volume,
  TrendField::TrendScore,
];

/// Smaller schema for generic sources: name, score and volume.
pub const GENERIC_SCHEMA: &[TrendField] =
  &[TrendField::Name, TrendField::TrendScore, TrendField::Volume];

/// One trending asset or topic, normalized from a provider's native schema.
///
/// Fields a provider did not supply stay `None`; whether that is acceptable
/// depends on the producing adapter's schema. Records are built once through
/// [`TrendRecordBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
  #[serde(skip_serializing_if = "Option::is_none")]
  name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  symbol: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  volume: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  trend_score: Option<f64>,
}

impl TrendRecord {
  pub fn builder() -> TrendRecordBuilder {
    TrendRecordBuilder::default()
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn symbol(&self) -> Option<&str> {
    self.symbol.as_deref()
  }

  pub fn price(&self) -> Option<f64> {
    self.price
  }

  pub fn volume(&self) -> Option<f64> {
    self.volume
  }

  pub fn trend_score(&self) -> Option<f64> {
    self.trend_score
  }

  pub fn has_field(&self, field: TrendField) -> bool {
    match field {
      TrendField::Name => self.name.is_some(),
      TrendField::Symbol => self.symbol.is_some(),
      TrendField::Price => self.price.is_some(),
      TrendField::Volume => self.volume.is_some(),
      TrendField::TrendScore => self.trend_score.is_some(),
    }
  }

  /// Numeric value of a market field, if it is one and is present.
  pub fn numeric(&self, field: TrendField) -> Option<f64> {
    match field {
      TrendField::Price => self.price,
      TrendField::Volume => self.volume,
      TrendField::TrendScore => self.trend_score,
      TrendField::Name | TrendField::Symbol => None,
    }
  }
}

#[derive(Debug, Default)]
pub struct TrendRecordBuilder {
  record: TrendRecord,
}

impl TrendRecordBuilder {
  pub fn name(mut self, name: impl Into<Option<String>>) -> Self {
    self.record.name = name.into();
    self
  }

  pub fn symbol(mut self, symbol: impl Into<Option<String>>) -> Self {
    self.record.symbol = symbol.into();
    self
  }

  pub fn price(mut self, price: impl Into<Option<f64>>) -> Self {
    self.record.price = price.into();
    self
  }

  pub fn volume(mut self, volume: impl Into<Option<f64>>) -> Self {
    self.record.volume = volume.into();
    self
  }

  pub fn trend_score(mut self, trend_score: impl Into<Option<f64>>) -> Self {
    self.record.trend_score = trend_score.into();
    self
  }

  pub fn build(self) -> TrendRecord {
    self.record
  }
}
