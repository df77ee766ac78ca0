//! # Checkout Module
//!
//! Drafting an order from the cart.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  Cart View ──► Checkout Form ──► OrderDraft::from_cart ──► Backend     │
//! │                     │                     │                    │        │
//! │                validate()          snapshot lines,        insert rows,  │
//! │                (form rules)        subtotal+shipping      assign id     │
//! │                                           │                    │        │
//! │                                           └──── on success ────┘        │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                              cart.clear()               │
//! │                                                                         │
//! │  The draft carries everything the backend insert needs; the backend    │
//! │  re-validates totals and assigns the real order id.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation;

// =============================================================================
// Payment Method
// =============================================================================

/// How the shopper pays.
///
/// Wire values match the backend's `orders.payment_method` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Wire transfer; bank details are shown after the order is placed.
    #[serde(rename = "bank")]
    BankTransfer,

    /// Card payment through the Shopier hosted page.
    #[serde(rename = "shopier")]
    Shopier,
}

// =============================================================================
// Customer Details
// =============================================================================

/// Delivery and contact details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CustomerDetails {
    /// Validates every field against the checkout form rules.
    ///
    /// Returns the first violation; the form highlights one field at a time.
    pub fn validate(&self) -> CoreResult<()> {
        validation::validate_full_name(&self.full_name)?;
        validation::validate_email(&self.email)?;
        validation::validate_phone(&self.phone)?;
        validation::validate_address(&self.address)?;
        validation::validate_city(&self.city)?;
        validation::validate_postal_code(&self.postal_code)?;
        Ok(())
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// A line item in an order, snapshotted from a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    /// Product (or variant) id the line was built from.
    pub product_id: String,

    /// Product name at order time (frozen).
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: i64,

    /// Unit price in kuruş at order time (frozen).
    pub unit_price_cents: i64,

    /// Line total (unit price × quantity).
    pub total_price_cents: i64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        OrderLine {
            product_id: line.id.clone(),
            product_name: line.name.clone(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            total_price_cents: line.line_total_cents(),
        }
    }
}

// =============================================================================
// Order Draft
// =============================================================================

/// An order ready to be submitted to the backend.
///
/// The backend assigns the persistent order id; the client-side
/// `order_number` is a human-readable reference shown in the confirmation
/// toast and on the success page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    /// Human-readable reference, `ORD-{unix millis}`.
    pub order_number: String,

    /// Delivery and contact details.
    pub customer: CustomerDetails,

    /// Selected payment method.
    pub payment_method: PaymentMethod,

    /// Snapshotted cart lines.
    pub lines: Vec<OrderLine>,

    /// Sum of line totals, in kuruş.
    pub subtotal_cents: i64,

    /// Flat shipping cost, in kuruş.
    pub shipping_cents: i64,

    /// Grand total (subtotal + shipping), in kuruş.
    pub total_cents: i64,

    /// When the draft was built.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderDraft {
    /// Builds an order draft from the current cart.
    ///
    /// ## Behavior
    /// - An empty cart is `CoreError::EmptyCart` — the checkout page
    ///   redirects before reaching this point, but the rule holds here too.
    /// - Customer details are validated against the form rules.
    /// - Every cart line is snapshotted into an `OrderLine`; the cart is
    ///   NOT mutated. The caller clears it after the backend accepts the
    ///   order.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use dezemu_core::cart::Cart;
    /// use dezemu_core::checkout::{CustomerDetails, OrderDraft, PaymentMethod};
    /// use dezemu_core::money::Money;
    /// use dezemu_core::types::CartLineInput;
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(
    ///     CartLineInput {
    ///         id: "p1".into(),
    ///         name: "Mug".into(),
    ///         unit_price_cents: 5000,
    ///         image_url: None,
    ///         stock_limit: 3,
    ///         slug: "mug".into(),
    ///     },
    ///     2,
    /// );
    ///
    /// let customer = CustomerDetails {
    ///     full_name: "Ayşe Yılmaz".into(),
    ///     email: "ayse@example.com".into(),
    ///     phone: "05321234567".into(),
    ///     address: "Atatürk Cad. No:1 D:2".into(),
    ///     city: "İstanbul".into(),
    ///     postal_code: "34000".into(),
    /// };
    ///
    /// let draft = OrderDraft::from_cart(
    ///     &cart,
    ///     customer,
    ///     PaymentMethod::BankTransfer,
    ///     Money::from_kurus(3999),
    ///     Utc::now(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(draft.subtotal_cents, 10000);
    /// assert_eq!(draft.total_cents, 13999);
    /// ```
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        payment_method: PaymentMethod,
        shipping: Money,
        placed_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        customer.validate()?;

        let subtotal = cart.total_price();
        let total = subtotal + shipping;

        Ok(OrderDraft {
            order_number: format!("ORD-{}", placed_at.timestamp_millis()),
            customer,
            payment_method,
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            subtotal_cents: subtotal.kurus(),
            shipping_cents: shipping.kurus(),
            total_cents: total.kurus(),
            placed_at,
        })
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_kurus(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartLineInput;
    use crate::DEFAULT_SHIPPING_CENTS;
    use chrono::TimeZone;

    fn input(id: &str, price_cents: i64, stock: i64) -> CartLineInput {
        CartLineInput {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            image_url: None,
            stock_limit: stock,
            slug: format!("product-{}", id),
        }
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            full_name: "Ayşe Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "05321234567".to_string(),
            address: "Atatürk Cad. No:1 D:2".to_string(),
            city: "İstanbul".to_string(),
            postal_code: "34000".to_string(),
        }
    }

    #[test]
    fn test_draft_totals_and_lines() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 2);
        cart.add_item(input("p2", 3000, 10), 1);

        let draft = OrderDraft::from_cart(
            &cart,
            customer(),
            PaymentMethod::BankTransfer,
            Money::from_kurus(DEFAULT_SHIPPING_CENTS),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].product_id, "p1");
        assert_eq!(draft.lines[0].total_price_cents, 10000);
        assert_eq!(draft.subtotal_cents, 13000);
        assert_eq!(draft.shipping_cents, 3999);
        assert_eq!(draft.total_cents, 16999);
        assert_eq!(draft.total().kurus(), 16999);

        // Building a draft never mutates the cart
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_order_number_from_timestamp() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 1);

        let placed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let draft = OrderDraft::from_cart(
            &cart,
            customer(),
            PaymentMethod::Shopier,
            Money::zero(),
            placed_at,
        )
        .unwrap();

        assert_eq!(
            draft.order_number,
            format!("ORD-{}", placed_at.timestamp_millis())
        );
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = Cart::new();
        let result = OrderDraft::from_cart(
            &cart,
            customer(),
            PaymentMethod::BankTransfer,
            Money::from_kurus(DEFAULT_SHIPPING_CENTS),
            Utc::now(),
        );

        assert!(matches!(result, Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_invalid_customer_rejected() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 1);

        let mut bad = customer();
        bad.address = "short".to_string();

        let result = OrderDraft::from_cart(
            &cart,
            bad,
            PaymentMethod::BankTransfer,
            Money::from_kurus(DEFAULT_SHIPPING_CENTS),
            Utc::now(),
        );

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_payment_method_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Shopier).unwrap(),
            "\"shopier\""
        );
    }
}
