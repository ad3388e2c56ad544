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

use anyhow::{Context, Result};
use std::path::Path;
use trend_core::{Config, CredentialsResolver};

/// Everything a command needs: runtime settings plus where credentials come from.
pub struct AppConfig {
  pub trend: Config,
  pub resolver: CredentialsResolver,
}

impl AppConfig {
  pub fn load(env_file: Option<&Path>) -> Result<Self> {
    // Loaded first so an env file can also carry TREND_* settings
    let resolver = match env_file {
      Some(path) => CredentialsResolver::from_env_file(path)?,
      None => CredentialsResolver::from_process_env(),
    };

    let trend = Config::from_env().context("Invalid trend configuration")?;

    Ok(Self { trend, resolver })
  }
}
