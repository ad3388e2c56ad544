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

//! Semantic and security validation of author-supplied trend contexts.
//!
//! Input is untyped JSON so type mismatches can be reported per field rather
//! than failing deserialization wholesale.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use trend_models::{MarketSentiment, TrendContext, ValidationResult};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

const TOPIC_MIN: usize = 2;
const TOPIC_MAX: usize = 100;
const SOURCE_MIN: usize = 2;
const SOURCE_MAX: usize = 50;
const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

/// A successfully sanitized field value.
#[derive(Debug, Clone, PartialEq)]
enum SanitizedField {
  Topic(String),
  Source(String),
  RelevanceScore(f64),
  MarketSentiment(MarketSentiment),
}

type FieldValidator = fn(&Value) -> Result<SanitizedField, String>;

/// Required fields, in reporting order, each bound to its validator.
const CONTEXT_FIELDS: [(&str, FieldValidator); 4] = [
  ("topic", topic_field),
  ("source", source_field),
  ("relevance_score", relevance_score_field),
  ("market_sentiment", market_sentiment_field),
];

fn topic_field(value: &Value) -> Result<SanitizedField, String> {
  sanitize_topic(value).map(SanitizedField::Topic)
}

fn source_field(value: &Value) -> Result<SanitizedField, String> {
  sanitize_source(value).map(SanitizedField::Source)
}

fn relevance_score_field(value: &Value) -> Result<SanitizedField, String> {
  sanitize_relevance_score(value).map(SanitizedField::RelevanceScore)
}

fn market_sentiment_field(value: &Value) -> Result<SanitizedField, String> {
  sanitize_market_sentiment(value).map(SanitizedField::MarketSentiment)
}

fn collapse_whitespace(value: &str) -> String {
  WHITESPACE.replace_all(value, " ").trim().to_string()
}

/// Collapse whitespace, bound the length, then strip markup tags.
///
/// Tags are removed after the length check, so the sanitized topic can be
/// shorter than the bounds that were enforced. Kept as observed behavior.
pub(crate) fn sanitize_topic(value: &Value) -> Result<String, String> {
  let Value::String(raw) = value else {
    return Err("Topic must be a string".to_string());
  };

  let topic = collapse_whitespace(raw);
  let len = topic.chars().count();

  if len < TOPIC_MIN {
    return Err(format!("Topic must be at least {} characters long", TOPIC_MIN));
  }
  if len > TOPIC_MAX {
    return Err(format!("Topic must not exceed {} characters", TOPIC_MAX));
  }

  Ok(MARKUP_TAG.replace_all(&topic, "").into_owned())
}

pub(crate) fn sanitize_source(value: &Value) -> Result<String, String> {
  let Value::String(raw) = value else {
    return Err("Source must be a string".to_string());
  };

  let source = collapse_whitespace(raw);
  let len = source.chars().count();

  if len < SOURCE_MIN {
    return Err(format!("Source must be at least {} characters long", SOURCE_MIN));
  }
  if len > SOURCE_MAX {
    return Err(format!("Source must not exceed {} characters", SOURCE_MAX));
  }

  Ok(source)
}

pub(crate) fn sanitize_relevance_score(value: &Value) -> Result<f64, String> {
  let score = match value {
    Value::Number(n) => n.as_f64().ok_or_else(|| "Invalid relevance score".to_string())?,
    _ => return Err("Relevance score must be a number".to_string()),
  };

  if !score.is_finite() {
    return Err("Invalid relevance score".to_string());
  }
  if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
    return Err("Relevance score must be between 0 and 100".to_string());
  }

  Ok(round_to_cents(score))
}

pub(crate) fn sanitize_market_sentiment(value: &Value) -> Result<MarketSentiment, String> {
  let Value::String(raw) = value else {
    return Err("Market sentiment must be a string".to_string());
  };

  MarketSentiment::parse(raw).ok_or_else(|| {
    let allowed: Vec<&str> = MarketSentiment::ALL.iter().map(|s| s.as_str()).collect();
    format!("Invalid market sentiment. Must be one of: {}", allowed.join(", "))
  })
}

/// Round on the exact decimal expansion, ties to even.
fn round_to_cents(value: f64) -> f64 {
  format!("{:.2}", value).parse().unwrap_or(value)
}

/// Validate every required field and aggregate all errors.
///
/// `sanitized_data` is populated only if every field passed.
pub fn validate_trend_context(input: &Value) -> ValidationResult<TrendContext> {
  let Value::Object(fields) = input else {
    return ValidationResult::invalid(vec!["Trend context must be an object".to_string()]);
  };

  let mut errors = Vec::new();
  let mut topic = None;
  let mut source = None;
  let mut relevance_score = None;
  let mut market_sentiment = None;

  for (name, validator) in CONTEXT_FIELDS {
    let Some(value) = fields.get(name) else {
      errors.push(format!("Missing required field: {}", name));
      continue;
    };

    match validator(value) {
      Ok(SanitizedField::Topic(v)) => topic = Some(v),
      Ok(SanitizedField::Source(v)) => source = Some(v),
      Ok(SanitizedField::RelevanceScore(v)) => relevance_score = Some(v),
      Ok(SanitizedField::MarketSentiment(v)) => market_sentiment = Some(v),
      Err(message) => errors.push(message),
    }
  }

  match (topic, source, relevance_score, market_sentiment) {
    (Some(topic), Some(source), Some(relevance_score), Some(market_sentiment))
      if errors.is_empty() =>
    {
      ValidationResult::valid(TrendContext { topic, source, relevance_score, market_sentiment })
    }
    _ => ValidationResult::invalid(errors),
  }
}
