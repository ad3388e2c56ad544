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

//! Trend data validation.
//!
//! Two independent paths share [`ValidationResult`]:
//! - structural: provider output checked against an adapter's required fields
//! - semantic: author-supplied trend contexts checked, sanitized and stripped
//!   of markup

pub mod context;
pub mod structural;

use serde_json::Value;
use trend_models::{MarketSentiment, TrendContext, TrendField, TrendRecord, ValidationResult};

pub use context::validate_trend_context;
pub use structural::{ensure_valid_batch, validate_records};

/// Entry point grouping both validation paths and the per-field checks.
pub struct TrendDataValidator;

impl TrendDataValidator {
  pub fn validate_records(
    records: Vec<TrendRecord>,
    required: &[TrendField],
  ) -> ValidationResult<Vec<TrendRecord>> {
    structural::validate_records(records, required)
  }

  pub fn validate_trend_context(input: &Value) -> ValidationResult<TrendContext> {
    context::validate_trend_context(input)
  }

  pub fn validate_topic(value: &Value) -> ValidationResult<String> {
    single(context::sanitize_topic(value))
  }

  pub fn validate_source(value: &Value) -> ValidationResult<String> {
    single(context::sanitize_source(value))
  }

  pub fn validate_relevance_score(value: &Value) -> ValidationResult<f64> {
    single(context::sanitize_relevance_score(value))
  }

  pub fn validate_market_sentiment(value: &Value) -> ValidationResult<MarketSentiment> {
    single(context::sanitize_market_sentiment(value))
  }
}

fn single<T>(outcome: Result<T, String>) -> ValidationResult<T> {
  match outcome {
    Ok(value) => ValidationResult::valid(value),
    Err(message) => ValidationResult::invalid(vec![message]),
  }
}
