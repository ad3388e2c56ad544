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

use serde::{Deserialize, Serialize};

/// Outcome shared by both validation paths.
///
/// `sanitized_data` is only populated when `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult<T> {
  pub is_valid: bool,
  pub errors: Vec<String>,
  pub sanitized_data: Option<T>,
}

impl<T> ValidationResult<T> {
  pub fn valid(data: T) -> Self {
    Self { is_valid: true, errors: Vec::new(), sanitized_data: Some(data) }
  }

  pub fn invalid(errors: Vec<String>) -> Self {
    Self { is_valid: false, errors, sanitized_data: None }
  }

  /// Build from aggregated errors; the data is kept only if there are none.
  pub fn from_parts(errors: Vec<String>, data: T) -> Self {
    if errors.is_empty() {
      Self::valid(data)
    } else {
      Self::invalid(errors)
    }
  }

  pub fn into_result(self) -> Result<T, Vec<String>> {
    match self.sanitized_data {
      Some(data) if self.is_valid => Ok(data),
      _ => Err(self.errors),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_parts_voids_data_on_error() {
    let result = ValidationResult::from_parts(vec!["bad".to_string()], 42);
    assert!(!result.is_valid);
    assert_eq!(result.sanitized_data, None);
    assert_eq!(result.into_result(), Err(vec!["bad".to_string()]));
  }

  #[test]
  fn test_from_parts_keeps_data_when_clean() {
    let result = ValidationResult::from_parts(Vec::new(), "ok");
    assert!(result.is_valid);
    assert_eq!(result.into_result(), Ok("ok"));
  }
}
