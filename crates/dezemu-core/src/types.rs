//! # Catalog Types
//!
//! Types describing the product catalog as the client sees it.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐      ┌──────────────────┐                          │
//! │  │    Product      │ 1..* │  ProductVariant  │                          │
//! │  │  ─────────────  │─────►│  ──────────────  │                          │
//! │  │  id, slug       │      │  id              │                          │
//! │  │  price_cents    │      │  price adj.      │                          │
//! │  │  stock_quantity │      │  own stock       │                          │
//! │  └────────┬────────┘      └────────┬─────────┘                          │
//! │           │                        │                                    │
//! │           └────────┬───────────────┘                                    │
//! │                    ▼  cart_input()                                      │
//! │           ┌─────────────────┐                                           │
//! │           │  CartLineInput  │  snapshot handed to Cart::add_item        │
//! │           └─────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! The cart never holds a `Product` reference. When the shopper adds an item,
//! the product page builds a `CartLineInput` snapshot (name, price, stock at
//! that moment). If the catalog changes afterwards, the cart keeps showing
//! what the shopper agreed to.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Fetched by the frontend from the hosted backend; this crate only consumes
/// it to build cart snapshots and display math.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the backend.
    pub id: String,

    /// URL slug used to route back to the product page.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Long description (product page body).
    pub description: Option<String>,

    /// One-line description (cards, lists).
    pub short_description: Option<String>,

    /// Price in kuruş.
    pub price_cents: i64,

    /// Pre-discount price in kuruş, shown struck through when present.
    pub compare_price_cents: Option<i64>,

    /// Stock available for the base product.
    pub stock_quantity: i64,

    /// Primary image URL.
    pub image_url: Option<String>,

    /// Whether the product is purchasable (soft delete).
    pub is_active: bool,

    /// Digital goods skip shipping address requirements in the UI.
    pub is_digital: bool,

    /// Featured products surface on the home page.
    pub is_featured: bool,

    /// Variants (size, color, ...). Empty for single-variant products.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Returns the base price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_kurus(self.price_cents)
    }

    /// Returns the pre-discount price, if any.
    #[inline]
    pub fn compare_price(&self) -> Option<Money> {
        self.compare_price_cents.map(Money::from_kurus)
    }

    /// Discount percentage for the badge on the product page.
    ///
    /// Computed as `round((compare - price) / compare * 100)`; zero when
    /// there is no compare price or it does not exceed the current price.
    ///
    /// ## Example
    /// ```rust
    /// use dezemu_core::types::Product;
    /// # fn product() -> Product {
    /// #     Product {
    /// #         id: "p".into(), slug: "p".into(), name: "P".into(),
    /// #         description: None, short_description: None,
    /// #         price_cents: 29999, compare_price_cents: Some(39999),
    /// #         stock_quantity: 1, image_url: None,
    /// #         is_active: true, is_digital: false, is_featured: false,
    /// #         variants: vec![],
    /// #     }
    /// # }
    /// let p = product(); // ₺299.99, was ₺399.99
    /// assert_eq!(p.discount_percent(), 25);
    /// ```
    pub fn discount_percent(&self) -> u32 {
        match self.compare_price_cents {
            Some(compare) if compare > self.price_cents && compare > 0 => {
                // Integer round-half-up of (diff / compare) * 100
                (((compare - self.price_cents) * 100 + compare / 2) / compare) as u32
            }
            _ => 0,
        }
    }

    /// Checks whether the base product has stock.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Variants currently offered for sale.
    pub fn active_variants(&self) -> impl Iterator<Item = &ProductVariant> {
        self.variants.iter().filter(|v| v.is_active)
    }

    /// Builds the cart snapshot for this product, optionally for a variant.
    ///
    /// ## Behavior (mirrors the product detail page)
    /// - With a variant: the variant id identifies the cart line, the name
    ///   becomes `"{product} - {variant}: {value}"`, the unit price is the
    ///   base price plus the variant adjustment, and the stock snapshot is
    ///   the variant's own stock.
    /// - Without: the product's id, name, price, and stock are used as-is.
    pub fn cart_input(&self, variant: Option<&ProductVariant>) -> CartLineInput {
        match variant {
            Some(v) => CartLineInput {
                id: v.id.clone(),
                name: format!("{} - {}: {}", self.name, v.name, v.value),
                unit_price_cents: self.price_cents + v.price_adjustment_cents,
                image_url: self.image_url.clone(),
                stock_limit: v.stock_quantity,
                slug: self.slug.clone(),
            },
            None => CartLineInput {
                id: self.id.clone(),
                name: self.name.clone(),
                unit_price_cents: self.price_cents,
                image_url: self.image_url.clone(),
                stock_limit: self.stock_quantity,
                slug: self.slug.clone(),
            },
        }
    }
}

// =============================================================================
// Product Variant
// =============================================================================

/// A purchasable variant of a product (e.g. "Beden: M").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductVariant {
    /// Unique identifier; becomes the cart line id when selected.
    pub id: String,

    /// Attribute name ("Beden", "Renk", ...).
    pub name: String,

    /// Attribute value ("M", "Siyah", ...).
    pub value: String,

    /// Price delta relative to the base product, in kuruş. May be negative.
    pub price_adjustment_cents: i64,

    /// Stock tracked per variant, independent of the base product.
    pub stock_quantity: i64,

    /// Whether this variant is offered for sale.
    pub is_active: bool,
}

// =============================================================================
// Cart Line Input
// =============================================================================

/// Everything a cart line needs except the quantity.
///
/// This is the snapshot the product page hands to `Cart::add_item`: name,
/// price, and stock are captured at add time and never re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineInput {
    /// Product id, or variant id when a variant was selected.
    pub id: String,

    /// Display label at add time (frozen).
    pub name: String,

    /// Price per unit in kuruş at add time (frozen).
    pub unit_price_cents: i64,

    /// Primary image for the cart view.
    pub image_url: Option<String>,

    /// Maximum purchasable quantity at add time (frozen snapshot).
    pub stock_limit: i64,

    /// Routing slug back to the product page.
    pub slug: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
