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

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{Map, Value};
use trend_sources::TrendDataValidator;

#[derive(Args, Debug, Default)]
pub struct ContextCommand {
  #[arg(long)]
  topic: Option<String>,

  #[arg(long)]
  source: Option<String>,

  #[arg(long)]
  relevance_score: Option<f64>,

  /// bullish, bearish or neutral
  #[arg(long)]
  sentiment: Option<String>,
}

impl ContextCommand {
  /// Only flags that were given become keys, so omissions surface as
  /// missing-field errors.
  fn to_value(&self) -> Value {
    let mut fields = Map::new();
    if let Some(topic) = &self.topic {
      fields.insert("topic".to_string(), Value::from(topic.as_str()));
    }
    if let Some(source) = &self.source {
      fields.insert("source".to_string(), Value::from(source.as_str()));
    }
    if let Some(score) = self.relevance_score {
      fields.insert("relevance_score".to_string(), Value::from(score));
    }
    if let Some(sentiment) = &self.sentiment {
      fields.insert("market_sentiment".to_string(), Value::from(sentiment.as_str()));
    }
    Value::Object(fields)
  }
}

pub fn execute(cmd: ContextCommand) -> Result<()> {
  let result = TrendDataValidator::validate_trend_context(&cmd.to_value());

  match result.sanitized_data {
    Some(context) if result.is_valid => {
      println!("{}", serde_json::to_string_pretty(&context)?);
      Ok(())
    }
    _ => {
      for error in &result.errors {
        eprintln!("  - {}", error);
      }
      bail!("Trend context rejected with {} error(s)", result.errors.len())
    }
  }
}
