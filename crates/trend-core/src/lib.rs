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

//! # trend-core
//!
//! Shared foundations for crypto trend sourcing:
//! - the error taxonomy every adapter reports through
//! - runtime configuration loaded from the environment
//! - the credentials resolver used to construct provider adapters

pub mod config;
pub mod credentials;
pub mod error;

pub use config::Config;
pub use credentials::{CredentialField, Credentials, CredentialsResolver, ServiceDefinition};
pub use error::{Result, TransportError, TrendSourcingError};

/// Base URL for the CoinMarketCap Pro API
pub const COINMARKETCAP_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Base URL for the public CoinGecko API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// Base URL for the Binance spot API
pub const BINANCE_BASE_URL: &str = "https://api.binance.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LISTING_LIMIT: u32 = 100;
/// Largest page CoinMarketCap listings accept
pub const MAX_LISTING_LIMIT: u32 = 5000;
