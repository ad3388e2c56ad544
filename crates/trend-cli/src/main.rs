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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::{context::ContextCommand, credentials::CredentialsCommand, fetch::FetchCommand};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "trends")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Dotenv file to read credentials from
  #[arg(long, global = true, env = "TREND_ENV_FILE")]
  env_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List supported trend sources
  Sources,
  /// Check whether a service's credentials are complete
  Credentials(CredentialsCommand),
  /// Fetch current trends from a source
  Fetch(FetchCommand),
  /// Validate and sanitize a trend context
  Context(ContextCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  // RUST_LOG wins over the flag
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

  let config = config::AppConfig::load(cli.env_file.as_deref())?;

  match cli.command {
    Commands::Sources => commands::sources::execute(&config),
    Commands::Credentials(cmd) => commands::credentials::execute(cmd, &config),
    Commands::Fetch(cmd) => commands::fetch::execute(cmd, &config).await,
    Commands::Context(cmd) => commands::context::execute(cmd),
  }
}
