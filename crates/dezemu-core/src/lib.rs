//! # dezemu-core: Pure Business Logic for the Dezemu Storefront
//!
//! This crate is the **heart** of the Dezemu shop client. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Dezemu Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (Web UI)                           │   │
//! │  │   Product Page ──► Cart View ──► Checkout ──► Order History    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    dezemu-store                                 │   │
//! │  │    CartStore: hydration, persistence, notices                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dezemu-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │OrderDraft │  │   │
//! │  │   │  Variant  │  │  (kuruş)  │  │ CartLine  │  │ Customer  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  The hosted backend (auth, rows, objects) is an external collaborator  │
//! │  reached by the frontend, never by this crate.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, ProductVariant, CartLineInput)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart lines and state transitions with named outcomes
//! - [`checkout`] - Order drafting from the cart
//! - [`error`] - Domain error types
//! - [`validation`] - Input and checkout-form validation
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Cart operations are all-or-nothing; a rejected
//!    mutation leaves the cart byte-for-byte unchanged
//! 2. **No I/O**: Storage, network, and backend access is FORBIDDEN here
//! 3. **Integer Money**: All prices are kuruş (i64) to avoid float errors
//! 4. **Named Outcomes**: Rejections and no-ops are reported values, never
//!    exceptions; callers can tell "invalid input" from "already there"
//!
//! ## Example Usage
//!
//! ```rust
//! use dezemu_core::cart::{Cart, CartOutcome};
//! use dezemu_core::types::CartLineInput;
//!
//! let mut cart = Cart::new();
//! let mug = CartLineInput {
//!     id: "p1".to_string(),
//!     name: "Mug".to_string(),
//!     unit_price_cents: 5000,
//!     image_url: None,
//!     stock_limit: 3,
//!     slug: "mug".to_string(),
//! };
//!
//! assert!(matches!(cart.add_item(mug, 1), CartOutcome::Added { .. }));
//! assert_eq!(cart.total_price().kurus(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dezemu_core::Money` instead of
// `use dezemu_core::money::Money`

pub use cart::{Cart, CartLine, CartOutcome, CartTotals};
pub use checkout::{CustomerDetails, OrderDraft, OrderLine, PaymentMethod};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartLineInput, Product, ProductVariant};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping cost in kuruş charged at checkout (₺39.99).
///
/// ## Why a constant?
/// The shop ships everything at a single flat rate. Per-order or
/// weight-based rates would come from the backend; until then the client
/// quotes this value and the backend re-validates it on order creation.
pub const DEFAULT_SHIPPING_CENTS: i64 = 3999;
