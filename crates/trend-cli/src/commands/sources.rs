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

use crate::config::AppConfig;
use anyhow::Result;
use trend_sources::TrendSourceFactory;

/// Print one line per supported source.
///
/// Sources whose credentials are incomplete are still listed, marked as such.
pub fn execute(config: &AppConfig) -> Result<()> {
  for id in TrendSourceFactory::supported_sources() {
    match TrendSourceFactory::create_with_config(id, &config.resolver, &config.trend) {
      Ok(source) => {
        let schema: Vec<&str> = source.required_fields().iter().map(|f| f.as_str()).collect();
        println!(
          "{:<14} schema=[{}] score={}",
          id,
          schema.join(", "),
          source.score_order().as_str()
        );
      }
      Err(e) => println!("{:<14} unavailable ({})", id, e),
    }
  }
  Ok(())
}
