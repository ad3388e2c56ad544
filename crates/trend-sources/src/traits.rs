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

//! Trend source capability implemented by every provider adapter.

use async_trait::async_trait;
use trend_core::Result;
use trend_models::{ProviderKind, ScoreOrder, TrendField, TrendRecord};

/// A provider of trending crypto assets.
///
/// Implementations resolve their credentials when constructed, issue exactly
/// one outbound request per [`fetch_trends`](TrendSource::fetch_trends) call,
/// translate every transport failure into `SourceUnavailable`, and only
/// return batches that passed structural validation against
/// [`required_fields`](TrendSource::required_fields).
#[async_trait]
pub trait TrendSource: Send + Sync {
  /// Fetch and normalize the provider's current trends.
  async fn fetch_trends(&self) -> Result<Vec<TrendRecord>>;

  /// Which provider this adapter talks to.
  fn provider(&self) -> ProviderKind;

  /// Canonical fields every record from this adapter must carry.
  fn required_fields(&self) -> &'static [TrendField];

  /// Direction of this adapter's `trend_score`.
  fn score_order(&self) -> ScoreOrder;
}
