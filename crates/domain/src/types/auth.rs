//! Account types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wallet balance of the authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Current balance.
    pub balance: f64,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Any other wallet attributes.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_wallet() {
        let wallet: Wallet = serde_json::from_value(json!({
            "balance": 100.5,
            "currency": "USD",
            "credit_limit": 0,
        }))
        .unwrap();

        assert!((wallet.balance - 100.5).abs() < f64::EPSILON);
        assert_eq!(wallet.currency.as_deref(), Some("USD"));
        assert_eq!(wallet.extra.get("credit_limit"), Some(&json!(0)));
    }
}
