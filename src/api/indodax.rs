use crate::config::IndodaxConfig;
use crate::error::{AppError, Result};
use crate::models::RawTicker;

use super::RateLimiter;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;

pub struct IndodaxClient {
    client: reqwest::Client,
    config: IndodaxConfig,
    rate_limiter: RateLimiter,
}

impl IndodaxClient {
    pub fn new(config: IndodaxConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let requests_per_minute = config.requests_per_minute;
        Self {
            client,
            config,
            rate_limiter: RateLimiter::new(requests_per_minute),
        }
    }

    /// Fetch the full ticker map and normalize it into typed quotes.
    pub async fn get_tickers(&self) -> Result<Vec<RawTicker>> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/api/tickers", self.config.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::IndodaxApi(format!("Status {status}: {text}")));
        }

        let data: Value = response.json().await?;
        Ok(parse_tickers_response(&data))
    }
}

/// Normalize the raw `/api/tickers` payload into a list of typed quotes.
///
/// Indodax encodes most numeric fields as strings and has shipped the 24h
/// IDR volume under several field names over time, so every field goes
/// through lenient coercion. Entries whose `last`/`high`/`low` cannot be
/// coerced to a finite number are skipped; a container that is not an
/// object yields an empty list rather than an error. Output order mirrors
/// input iteration order.
pub fn parse_tickers_response(data: &Value) -> Vec<RawTicker> {
    let mut result = Vec::new();

    let tickers = match data.get("tickers").unwrap_or(data).as_object() {
        Some(map) => map,
        None => return result,
    };

    for (pair, info) in tickers {
        let info = match info.as_object() {
            Some(obj) => obj,
            None => continue,
        };

        let last = field_f64(info, "last");
        let high = field_f64(info, "high");
        let low = field_f64(info, "low");

        let (last, high, low) = match (last, high, low) {
            (Some(l), Some(h), Some(lo)) => (l, h, lo),
            _ => continue,
        };

        let vol_idr = field_f64(info, "vol_idr")
            .or_else(|| field_f64(info, "vol_id"))
            .or_else(|| field_f64(info, "vol_traded"))
            .unwrap_or(0.0);

        result.push(RawTicker {
            pair: pair.clone(),
            last,
            high,
            low,
            buy: field_f64(info, "buy").unwrap_or(last),
            sell: field_f64(info, "sell").unwrap_or(last),
            vol_idr,
        });
    }

    result
}

/// Read a field as f64, accepting both JSON numbers and numeric strings.
/// Returns `None` for missing, unparsable, or non-finite values.
fn field_f64(obj: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    let value = obj.get(key)?;
    let num = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    num.is_finite().then_some(num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_string_encoded_fields() {
        let data = json!({
            "tickers": {
                "btc_idr": {
                    "last": "1500000000",
                    "high": "1550000000",
                    "low": "1480000000",
                    "buy": "1499000000",
                    "sell": "1501000000",
                    "vol_idr": "250000000000"
                }
            }
        });

        let tickers = parse_tickers_response(&data);
        assert_eq!(tickers.len(), 1);
        assert_eq!(tickers[0].pair, "btc_idr");
        assert_eq!(tickers[0].last, 1_500_000_000.0);
        assert_eq!(tickers[0].vol_idr, 250_000_000_000.0);
    }

    #[test]
    fn test_skips_entries_with_missing_prices() {
        let data = json!({
            "aaa_idr": { "last": "100", "high": "110", "low": "90" },
            "bbb_idr": { "last": "abc", "high": "110", "low": "90" },
            "ccc_idr": { "high": "110", "low": "90" }
        });

        let tickers = parse_tickers_response(&data);
        assert_eq!(tickers.len(), 1);
        assert_eq!(tickers[0].pair, "aaa_idr");
    }

    #[test]
    fn test_missing_buy_sell_fall_back_to_last() {
        let data = json!({
            "xyz_idr": { "last": 200.0, "high": 220.0, "low": 180.0 }
        });

        let tickers = parse_tickers_response(&data);
        assert_eq!(tickers[0].buy, 200.0);
        assert_eq!(tickers[0].sell, 200.0);
        assert_eq!(tickers[0].vol_idr, 0.0);
    }

    #[test]
    fn test_volume_field_aliases() {
        let data = json!({
            "a_idr": { "last": 1, "high": 2, "low": 1, "vol_id": 5000 },
            "b_idr": { "last": 1, "high": 2, "low": 1, "vol_traded": 7000 }
        });

        let tickers = parse_tickers_response(&data);
        let a = tickers.iter().find(|t| t.pair == "a_idr").unwrap();
        let b = tickers.iter().find(|t| t.pair == "b_idr").unwrap();
        assert_eq!(a.vol_idr, 5000.0);
        assert_eq!(b.vol_idr, 7000.0);
    }

    #[test]
    fn test_non_object_container_yields_empty() {
        assert!(parse_tickers_response(&json!(null)).is_empty());
        assert!(parse_tickers_response(&json!([1, 2, 3])).is_empty());
        assert!(parse_tickers_response(&json!("tickers")).is_empty());
    }

    #[test]
    fn test_unwrapped_map_without_tickers_key() {
        let data = json!({
            "eth_idr": { "last": "50000000", "high": "51000000", "low": "49000000" }
        });

        let tickers = parse_tickers_response(&data);
        assert_eq!(tickers.len(), 1);
    }
}
