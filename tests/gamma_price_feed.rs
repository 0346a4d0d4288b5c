//! Integration tests for the Gamma REST price feed
//!
//! These run against a local wiremock server, so they exercise the real
//! HTTP and JSON paths without touching the network.

mod common;

use rust_decimal_macros::dec;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use polymarket_hedger::common::errors::AgentError;
use polymarket_hedger::common::traits::PriceFeed;
use polymarket_hedger::polymarket::GammaClient;

use common::gamma_responses;

async fn server_with_body(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("condition_ids", "0xtestmarket"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

#[test_log::test(tokio::test)]
async fn test_prices_from_array_form() {
    let server = server_with_body(gamma_responses::MARKET_ARRAY_PRICES).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let prices = client.get_prices("0xtestmarket").await.unwrap();
    assert_eq!(prices.yes, dec!(0.86));
    assert_eq!(prices.no, dec!(0.14));
    assert!(prices.is_coherent());
}

#[test_log::test(tokio::test)]
async fn test_prices_from_embedded_string_form() {
    let server = server_with_body(gamma_responses::MARKET_EMBEDDED_PRICES).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let prices = client.get_prices("0xtestmarket").await.unwrap();
    assert_eq!(prices.yes, dec!(0.76));
    assert_eq!(prices.no, dec!(0.24));
}

#[test_log::test(tokio::test)]
async fn test_condition_id_is_lowercased() {
    let server = server_with_body(gamma_responses::MARKET_ARRAY_PRICES).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    // the mock only matches the lowercase query value
    let prices = client.get_prices("0xTESTMARKET").await.unwrap();
    assert_eq!(prices.yes, dec!(0.86));
}

#[test_log::test(tokio::test)]
async fn test_unknown_market_is_unavailable() {
    let server = server_with_body(gamma_responses::EMPTY).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let err = client.get_prices("0xtestmarket").await.unwrap_err();
    assert!(matches!(err, AgentError::PriceUnavailable(_)));
}

#[test_log::test(tokio::test)]
async fn test_unparseable_prices_are_unavailable() {
    let server = server_with_body(gamma_responses::MARKET_BAD_PRICES).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let err = client.get_prices("0xtestmarket").await.unwrap_err();
    assert!(matches!(err, AgentError::PriceUnavailable(_)));
}

#[test_log::test(tokio::test)]
async fn test_out_of_range_prices_are_unavailable() {
    let server = server_with_body(gamma_responses::MARKET_OUT_OF_RANGE_PRICES).await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let err = client.get_prices("0xtestmarket").await.unwrap_err();
    assert!(matches!(err, AgentError::PriceUnavailable(_)));
}

#[test_log::test(tokio::test)]
async fn test_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = GammaClient::new(&server.uri()).unwrap();

    let err = client.get_prices("0xtestmarket").await.unwrap_err();
    assert!(matches!(err, AgentError::PriceUnavailable(_)));
}
