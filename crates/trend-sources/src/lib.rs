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

//! # trend-sources
//!
//! Provider adapters that turn third-party market data into canonical
//! [`TrendRecord`](trend_models::TrendRecord)s, plus the validator guarding
//! both provider output and author-supplied trend contexts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trend_core::CredentialsResolver;
//! use trend_sources::{select_top_trend, TrendSourceFactory};
//!
//! let resolver = CredentialsResolver::from_process_env();
//! let source = TrendSourceFactory::create("coingecko", &resolver)?;
//! let trends = source.fetch_trends().await?;
//! let top = select_top_trend(&trends, source.score_order());
//! ```

pub mod factory;
pub mod providers;
pub mod selection;
pub mod traits;
pub mod transport;
pub mod validation;

pub use factory::TrendSourceFactory;
pub use providers::{BinanceSource, CoinGeckoSource, CoinMarketCapSource};
pub use selection::{select_top_context, select_top_trend};
pub use traits::TrendSource;
pub use transport::HttpTransport;
pub use validation::{validate_records, validate_trend_context, TrendDataValidator};
