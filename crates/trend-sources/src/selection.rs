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

//! Picking a single trend out of a validated batch.

use tracing::debug;
use trend_models::{ScoreOrder, TrendContext, TrendRecord};

/// Strongest record by `trend_score` under `order`.
///
/// Records without a finite score are skipped. Ties keep the earlier record.
pub fn select_top_trend(records: &[TrendRecord], order: ScoreOrder) -> Option<&TrendRecord> {
  let mut best: Option<(&TrendRecord, f64)> = None;
  for record in records {
    let Some(score) = record.trend_score().filter(|s| s.is_finite()) else {
      continue;
    };
    match best {
      Some((_, current)) if !order.prefers(score, current) => {}
      _ => best = Some((record, score)),
    }
  }
  best.map(|(record, _)| record)
}

/// Most relevant context at or above `min_relevance`, else the fallback.
pub fn select_top_context(contexts: &[TrendContext], min_relevance: f64) -> TrendContext {
  contexts
    .iter()
    .filter(|c| c.relevance_score >= min_relevance)
    .fold(None::<&TrendContext>, |best, c| match best {
      Some(b) if b.relevance_score >= c.relevance_score => Some(b),
      _ => Some(c),
    })
    .cloned()
    .unwrap_or_else(|| {
      debug!("No context reached relevance {}, using fallback", min_relevance);
      TrendContext::fallback()
    })
}
