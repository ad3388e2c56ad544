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
use clap::Args;
use trend_core::{CredentialsResolver, TrendSourcingError};

#[derive(Args, Debug)]
pub struct CredentialsCommand {
  /// Credential service identifier (e.g. coinmarketcap)
  service: String,
}

/// Report completeness only; values are never printed.
pub fn execute(cmd: CredentialsCommand, config: &AppConfig) -> Result<()> {
  match config.resolver.get_credentials(&cmd.service) {
    Ok(credentials) => {
      let fields: Vec<&str> = credentials.field_names().collect();
      if fields.is_empty() {
        println!("{}: complete (no credentials required)", credentials.service());
      } else {
        println!("{}: complete ({})", credentials.service(), fields.join(", "));
      }
      Ok(())
    }
    Err(e @ TrendSourcingError::UnknownService(_)) => {
      let known: Vec<&str> =
        CredentialsResolver::registered_services().iter().map(|s| s.service).collect();
      Err(anyhow::anyhow!("{} (known services: {})", e, known.join(", ")))
    }
    Err(e) => Err(e.into()),
  }
}
