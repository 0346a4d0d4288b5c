//! Serde types for Gamma API responses

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::common::errors::{AgentError, Result};

/// A market as returned by the Gamma `/markets` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GammaMarket {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "conditionId", default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    /// Gamma serves this either as a JSON array of strings or as a single
    /// string containing embedded JSON, depending on the endpoint
    #[serde(
        rename = "outcomePrices",
        default,
        deserialize_with = "outcome_prices"
    )]
    pub outcome_prices: Option<Vec<String>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub closed: Option<bool>,
}

impl GammaMarket {
    /// Parse the first two outcome prices as (YES, NO) decimals
    pub fn price_pair(&self) -> Result<(Decimal, Decimal)> {
        let prices = self
            .outcome_prices
            .as_ref()
            .ok_or_else(|| AgentError::PriceUnavailable("market has no outcome prices".into()))?;

        if prices.len() < 2 {
            return Err(AgentError::PriceUnavailable(format!(
                "expected two outcome prices, got {}",
                prices.len()
            )));
        }

        let parse = |raw: &str| {
            raw.parse::<Decimal>().map_err(|e| {
                AgentError::PriceUnavailable(format!("unparseable outcome price {:?}: {}", raw, e))
            })
        };

        Ok((parse(&prices[0])?, parse(&prices[1])?))
    }
}

fn outcome_prices<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Embedded(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::List(list)) => Ok(Some(list)),
        Some(Raw::Embedded(json)) => serde_json::from_str(&json)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_array_form() {
        let json = r#"{
            "id": "market_001",
            "conditionId": "0x123456",
            "question": "Will it rain tomorrow?",
            "outcomePrices": ["0.86", "0.14"],
            "active": true
        }"#;

        let market: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(market.price_pair().unwrap(), (dec!(0.86), dec!(0.14)));
    }

    #[test]
    fn test_parse_embedded_string_form() {
        let json = r#"{
            "conditionId": "0x123456",
            "outcomePrices": "[\"0.86\", \"0.14\"]"
        }"#;

        let market: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(market.price_pair().unwrap(), (dec!(0.86), dec!(0.14)));
    }

    #[test]
    fn test_missing_prices_error() {
        let market: GammaMarket = serde_json::from_str(r#"{"conditionId": "0x1"}"#).unwrap();
        assert!(matches!(
            market.price_pair(),
            Err(AgentError::PriceUnavailable(_))
        ));
    }

    #[test]
    fn test_single_price_error() {
        let market: GammaMarket =
            serde_json::from_str(r#"{"outcomePrices": ["0.86"]}"#).unwrap();
        assert!(market.price_pair().is_err());
    }

    #[test]
    fn test_garbage_price_error() {
        let market: GammaMarket =
            serde_json::from_str(r#"{"outcomePrices": ["abc", "0.14"]}"#).unwrap();
        assert!(market.price_pair().is_err());
    }
}
