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

//! Structural validation of provider output against a required-field schema.

use tracing::warn;
use trend_core::{Result, TrendSourcingError};
use trend_models::{ProviderKind, TrendField, TrendRecord, ValidationResult};

/// Check every record for the required fields.
///
/// All-or-nothing: any failing record rejects the batch, and every error
/// across every record is reported. An empty batch is invalid.
pub fn validate_records(
  records: Vec<TrendRecord>,
  required: &[TrendField],
) -> ValidationResult<Vec<TrendRecord>> {
  if records.is_empty() {
    return ValidationResult::invalid(vec!["No trend data retrieved".to_string()]);
  }

  let mut errors = Vec::new();
  for (index, record) in records.iter().enumerate() {
    check_record(index, record, required, &mut errors);
  }

  ValidationResult::from_parts(errors, records)
}

fn check_record(index: usize, record: &TrendRecord, required: &[TrendField], errors: &mut Vec<String>) {
  for field in required {
    if !record.has_field(*field) {
      errors.push(format!("Record {} missing required field: {}", index, field));
    }
  }

  if record.name().is_some_and(|name| name.trim().is_empty()) {
    errors.push(format!("Record {} field 'name' must not be empty", index));
  }

  for field in [TrendField::Price, TrendField::Volume, TrendField::TrendScore] {
    let Some(value) = record.numeric(field) else {
      continue;
    };
    if !value.is_finite() {
      errors.push(format!("Record {} field '{}' must be finite", index, field));
    } else if value < 0.0 && field != TrendField::TrendScore {
      errors.push(format!("Record {} field '{}' must be non-negative", index, field));
    }
  }
}

/// Adapter-side wrapper: validate and convert a rejection into
/// `InvalidTrendData` for `provider`.
pub fn ensure_valid_batch(
  provider: ProviderKind,
  records: Vec<TrendRecord>,
  required: &[TrendField],
) -> Result<Vec<TrendRecord>> {
  validate_records(records, required).into_result().map_err(|errors| {
    warn!("Rejected {} batch with {} validation error(s)", provider, errors.len());
    TrendSourcingError::InvalidTrendData { provider: provider.to_string(), errors }
  })
}
