//! # Store Configuration
//!
//! Single-vendor store identity and pricing configuration.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DEZEMU_*`)
//! 2. Defaults (this file)
//!
//! The shop runs in single-vendor mode: one seller, one currency, one flat
//! shipping rate. Per-seller configuration would come from the backend once
//! multi-vendor mode exists.

use serde::{Deserialize, Serialize};

use dezemu_core::DEFAULT_SHIPPING_CENTS;

/// Store-wide configuration.
///
/// Read-only after initialization; the store keeps a copy and never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Seller identifier used when tagging orders.
    pub seller_id: String,

    /// Seller display name (header, receipts).
    pub seller_name: String,

    /// Seller logo URL, if configured.
    pub seller_logo_url: Option<String>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Flat shipping cost in kuruş applied at checkout.
    pub shipping_flat_cents: i64,
}

impl Default for StoreConfig {
    /// Returns the single-vendor defaults.
    fn default() -> Self {
        StoreConfig {
            seller_id: "default_seller".to_string(),
            seller_name: "Dezemu Shop".to_string(),
            seller_logo_url: None,
            currency_symbol: "₺".to_string(),
            currency_decimals: 2,
            shipping_flat_cents: DEFAULT_SHIPPING_CENTS,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DEZEMU_SELLER_ID`: Override seller id
    /// - `DEZEMU_SELLER_NAME`: Override seller display name
    /// - `DEZEMU_SELLER_LOGO_URL`: Override seller logo
    /// - `DEZEMU_SHIPPING_CENTS`: Override flat shipping (kuruş)
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(seller_id) = std::env::var("DEZEMU_SELLER_ID") {
            config.seller_id = seller_id;
        }

        if let Ok(seller_name) = std::env::var("DEZEMU_SELLER_NAME") {
            config.seller_name = seller_name;
        }

        if let Ok(logo_url) = std::env::var("DEZEMU_SELLER_LOGO_URL") {
            config.seller_logo_url = Some(logo_url);
        }

        if let Ok(shipping) = std::env::var("DEZEMU_SHIPPING_CENTS") {
            if let Ok(cents) = shipping.parse::<i64>() {
                config.shipping_flat_cents = cents;
            }
        }

        config
    }

    /// Formats a kuruş amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use dezemu_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(29999), "₺299.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
