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

//! # trend-models
//!
//! Data types exchanged across the trend sourcing pipeline.
//!
//! - [`TrendRecord`]: canonical, provider-agnostic trending asset
//! - [`TrendContext`]: author-facing description of a selected trend
//! - [`ProviderKind`] / [`ScoreOrder`]: provider identity and score direction
//! - [`ValidationResult`]: result shape shared by both validation paths

pub mod context;
pub mod provider;
pub mod record;
pub mod validation;

pub use context::{MarketSentiment, TrendContext};
pub use provider::{ProviderKind, ScoreOrder};
pub use record::{TrendField, TrendRecord, TrendRecordBuilder, GENERIC_SCHEMA, RANKING_SCHEMA};
pub use validation::ValidationResult;
