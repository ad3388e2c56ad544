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

use serde_json::json;
use std::time::Duration;
use trend_core::{Config, CredentialsResolver, TransportError, TrendSourcingError};
use trend_models::{ProviderKind, ScoreOrder};
use trend_sources::{select_top_trend, TrendSource, TrendSourceFactory};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CMC_LISTINGS: &str = "/v1/cryptocurrency/listings/latest";
const CG_TRENDING: &str = "/api/v3/search/trending";
const BN_TICKER: &str = "/api/v3/ticker/24hr";

fn resolver() -> CredentialsResolver {
  CredentialsResolver::from_vars([
    ("COINMARKETCAP_API_KEY", "cmc-test-key"),
    ("BINANCE_API_KEY", "bn-test-key"),
    ("BINANCE_API_SECRET", "bn-test-secret"),
  ])
}

fn config_for(server: &MockServer) -> Config {
  Config {
    timeout_secs: 2,
    listing_limit: 5,
    coinmarketcap_base_url: server.uri(),
    coingecko_base_url: server.uri(),
    binance_base_url: server.uri(),
    ..Config::default()
  }
}

async fn source_for(id: &str, server: &MockServer) -> Box<dyn TrendSource> {
  TrendSourceFactory::create_with_config(id, &resolver(), &config_for(server)).unwrap()
}

fn cmc_listing() -> serde_json::Value {
  json!({
    "status": {"error_code": 0, "error_message": null},
    "data": [{
      "id": 1,
      "name": "Bitcoin",
      "symbol": "BTC",
      "cmc_rank": 1,
      "quote": {"USD": {"price": 64000.5, "volume_24h": 31000000000.0}}
    }]
  })
}

fn expect_unavailable(err: TrendSourcingError, expected_provider: &str) -> TransportError {
  match err {
    TrendSourcingError::SourceUnavailable { provider, cause } => {
      assert_eq!(provider, expected_provider);
      cause
    }
    other => panic!("Expected SourceUnavailable, got {:?}", other),
  }
}

#[tokio::test]
async fn test_coinmarketcap_single_asset_is_remapped() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .and(header("X-CMC_PRO_API_KEY", "cmc-test-key"))
    .and(query_param("start", "1"))
    .and(query_param("limit", "5"))
    .and(query_param("convert", "USD"))
    .respond_with(ResponseTemplate::new(200).set_body_json(cmc_listing()))
    .expect(1)
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  let trends = source.fetch_trends().await.unwrap();

  assert_eq!(trends.len(), 1);
  let btc = &trends[0];
  assert_eq!(btc.name(), Some("Bitcoin"));
  assert_eq!(btc.symbol(), Some("BTC"));
  assert_eq!(btc.price(), Some(64000.5));
  assert_eq!(btc.volume(), Some(31000000000.0));
  assert_eq!(btc.trend_score(), Some(1.0));
}

#[tokio::test]
async fn test_server_error_is_source_unavailable() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .respond_with(ResponseTemplate::new(500))
    .expect(1)
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  let err = source.fetch_trends().await.unwrap_err();

  let cause = expect_unavailable(err, "coinmarketcap");
  assert!(matches!(cause, TransportError::Status { status: 500 }));
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  let cause = expect_unavailable(source.fetch_trends().await.unwrap_err(), "coinmarketcap");
  assert!(matches!(cause, TransportError::MalformedBody(_)));
}

#[tokio::test]
async fn test_error_envelope_is_provider_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "status": {"error_code": 1002, "error_message": "API key missing."}
    })))
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  let cause = expect_unavailable(source.fetch_trends().await.unwrap_err(), "coinmarketcap");
  match cause {
    TransportError::Provider(message) => assert_eq!(message, "API key missing."),
    other => panic!("Expected Provider error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_missing_field_is_invalid_trend_data() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": [{"name": "Bitcoin", "cmc_rank": 1, "quote": {"USD": {"price": 1.0, "volume_24h": 2.0}}}]
    })))
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  match source.fetch_trends().await.unwrap_err() {
    TrendSourcingError::InvalidTrendData { provider, errors } => {
      assert_eq!(provider, "coinmarketcap");
      assert_eq!(errors, vec!["Record 0 missing required field: symbol".to_string()]);
    }
    other => panic!("Expected InvalidTrendData, got {:?}", other),
  }
}

#[tokio::test]
async fn test_empty_listing_is_invalid_trend_data() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CMC_LISTINGS))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
    .mount(&server)
    .await;

  let source = source_for("coinmarketcap", &server).await;
  assert!(matches!(
    source.fetch_trends().await.unwrap_err(),
    TrendSourcingError::InvalidTrendData { .. }
  ));
}

#[tokio::test]
async fn test_slow_provider_times_out() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CG_TRENDING))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"coins": []}))
        .set_delay(Duration::from_secs(3)),
    )
    .mount(&server)
    .await;

  let config = Config { timeout_secs: 1, ..config_for(&server) };
  let source = TrendSourceFactory::create_with_config("coingecko", &resolver(), &config).unwrap();

  let cause = expect_unavailable(source.fetch_trends().await.unwrap_err(), "coingecko");
  assert!(matches!(cause, TransportError::Timeout(_)), "got {:?}", cause);
}

#[tokio::test]
async fn test_coingecko_trending() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(CG_TRENDING))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "coins": [
        {"item": {"id": "pepe", "name": "Pepe", "symbol": "PEPE", "score": 0,
                  "data": {"price": 0.0000121, "total_volume": "$812,345,678"}}},
        {"item": {"id": "sui", "name": "Sui", "symbol": "SUI", "score": 1,
                  "data": {"price": 1.42, "total_volume": "$98,000"}}}
      ],
      "nfts": []
    })))
    .expect(1)
    .mount(&server)
    .await;

  let resolver = CredentialsResolver::from_vars(Vec::<(String, String)>::new());
  let source =
    TrendSourceFactory::create_with_config("coingecko", &resolver, &config_for(&server)).unwrap();
  let trends = source.fetch_trends().await.unwrap();

  assert_eq!(trends.len(), 2);
  assert_eq!(trends[1].volume(), Some(98000.0));

  let top = select_top_trend(&trends, source.score_order()).unwrap();
  assert_eq!(top.name(), Some("Pepe"));
}

#[tokio::test]
async fn test_binance_filters_and_ranks_by_quote_volume() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(BN_TICKER))
    .and(header("X-MBX-APIKEY", "bn-test-key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"symbol": "ETHBTC", "lastPrice": "0.05", "quoteVolume": "900000", "priceChangePercent": "1.1"},
      {"symbol": "BTCUSDT", "lastPrice": "64000.1", "quoteVolume": "1500000000", "priceChangePercent": "0.4"},
      {"symbol": "DOGEUSDT", "lastPrice": "0.12", "quoteVolume": "300000000", "priceChangePercent": "9.8"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let source = source_for("binance", &server).await;
  assert_eq!(source.provider(), ProviderKind::Binance);
  assert_eq!(source.score_order(), ScoreOrder::HigherIsBetter);

  let trends = source.fetch_trends().await.unwrap();
  let symbols: Vec<_> = trends.iter().filter_map(|t| t.symbol()).collect();
  assert_eq!(symbols, vec!["BTCUSDT", "DOGEUSDT"]);

  let top = select_top_trend(&trends, source.score_order()).unwrap();
  assert_eq!(top.name(), Some("DOGE"));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
  let config = Config {
    timeout_secs: 2,
    binance_base_url: "http://127.0.0.1:1".to_string(),
    ..Config::default()
  };
  let source = TrendSourceFactory::create_with_config("binance", &resolver(), &config).unwrap();

  let cause = expect_unavailable(source.fetch_trends().await.unwrap_err(), "binance");
  assert!(matches!(cause, TransportError::Network(_)), "got {:?}", cause);
}
