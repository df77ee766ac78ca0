//! # Cart Module
//!
//! The shopping cart: lines, state transitions, and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Shopper Action           Operation               State Change          │
//! │  ──────────────           ─────────               ────────────          │
//! │                                                                         │
//! │  "Sepete Ekle" ─────────► add_item() ───────────► push / merge qty     │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ────► lines[i].qty = n     │
//! │                                                                         │
//! │  Click Remove ──────────► remove_item() ────────► lines.retain(..)     │
//! │                                                                         │
//! │  Order placed ──────────► clear() ──────────────► lines.clear()        │
//! │                                                                         │
//! │  Every mutation returns a CartOutcome naming exactly what happened.    │
//! │  Rejected and ignored mutations leave the cart untouched.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `id` (adding the same id merges quantities)
//! - For every line, `1 <= quantity <= stock_limit`
//! - A line with `stock_limit == 0` can never be created
//! - Insertion order is preserved: first added stays first unless removed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartLineInput;

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the shopping cart.
///
/// ## Design Notes
/// - All display fields are frozen copies captured at add time. If the
///   product is repriced or restocked afterwards, the cart keeps the
///   snapshot the shopper agreed to.
/// - `stock_limit` is the snapshot ceiling for `quantity`; it is never
///   re-fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product id, or variant id when a variant was selected.
    pub id: String,

    /// Display label at add time (frozen).
    pub name: String,

    /// Price per unit in kuruş at add time (frozen).
    pub unit_price_cents: i64,

    /// Primary image for the cart view.
    pub image_url: Option<String>,

    /// Number of units requested. Always `1..=stock_limit`.
    pub quantity: i64,

    /// Maximum purchasable quantity at add time (frozen snapshot).
    pub stock_limit: i64,

    /// Routing slug back to the product page.
    pub slug: String,

    /// When this line was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from an add-time snapshot and a quantity.
    ///
    /// The caller (`Cart::add_item`) has already checked the quantity
    /// against the stock snapshot.
    fn new(input: CartLineInput, quantity: i64) -> Self {
        CartLine {
            id: input.id,
            name: input.name,
            unit_price_cents: input.unit_price_cents,
            image_url: input.image_url,
            quantity,
            stock_limit: input.stock_limit,
            slug: input.slug,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_kurus(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_kurus(self.line_total_cents())
    }
}

// =============================================================================
// Cart Outcome
// =============================================================================

/// The named result of a cart mutation.
///
/// ## Why an enum instead of Result?
/// "Tried to add more than in stock" is a normal, expected shopper-facing
/// case, not a program error. Returning a value lets callers (and tests)
/// distinguish every case:
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Outcome             State changed?   Persist?   Notice class           │
/// │  ─────────────────   ──────────────   ────────   ────────────           │
/// │  Added               yes              yes        "added"                │
/// │  Merged              yes              yes        "quantity updated"     │
/// │  Updated             yes              yes        (silent)               │
/// │  Removed             yes              yes        "removed"              │
/// │  InsufficientStock   NO               no         "insufficient stock"   │
/// │  NonPositiveQuantity NO               no         (silent)               │
/// │  NotInCart           NO               no         (silent)               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CartOutcome {
    /// A new line was inserted at the end of the cart.
    Added { id: String },

    /// The id was already in the cart; quantities were merged.
    Merged { id: String, quantity: i64 },

    /// The line's quantity was set to a new value.
    Updated { id: String, quantity: i64 },

    /// The line was removed.
    Removed { id: String },

    /// The requested (or merged) quantity exceeds the stock snapshot.
    /// The cart is unchanged.
    InsufficientStock {
        id: String,
        requested: i64,
        stock_limit: i64,
    },

    /// A quantity below 1 was requested. The cart is unchanged; removal
    /// goes exclusively through `remove_item`.
    NonPositiveQuantity { requested: i64 },

    /// The target id is not in the cart. A no-op, not an error.
    NotInCart { id: String },
}

impl CartOutcome {
    /// Whether this outcome mutated the cart (and therefore needs a
    /// persistence write).
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            CartOutcome::Added { .. }
                | CartOutcome::Merged { .. }
                | CartOutcome::Updated { .. }
                | CartOutcome::Removed { .. }
        )
    }

    /// Whether this outcome is a stock rejection.
    pub fn is_rejection(&self) -> bool {
        matches!(self, CartOutcome::InsufficientStock { .. })
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of unique lines.
///
/// This type is a pure state machine. Persistence, hydration, and shopper
/// notifications live in `dezemu-store`; every observable mutation goes
/// through the operations below and is all-or-nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Rebuilds a cart from persisted lines (rehydration path).
    ///
    /// The slot is client-writable, so the invariants are re-established
    /// here rather than trusted:
    /// - Duplicate ids keep the first occurrence.
    /// - Lines with `stock_limit < 1` or `quantity < 1` are dropped.
    /// - A quantity above the stock snapshot is clamped down to it.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();

        for mut line in lines {
            if line.stock_limit < 1 || line.quantity < 1 {
                continue;
            }
            if cart.lines.iter().any(|l| l.id == line.id) {
                continue;
            }
            if line.quantity > line.stock_limit {
                line.quantity = line.stock_limit;
            }
            cart.lines.push(line);
        }

        cart
    }

    /// Adds an item to the cart, merging quantities if the id is present.
    ///
    /// ## Behavior
    /// - `requested < 1` → `NonPositiveQuantity`, cart unchanged.
    /// - Id already in cart: the merged quantity is checked against the
    ///   line's stock snapshot; on overflow the whole mutation is rejected
    ///   and nothing changes. On success only the quantity changes — the
    ///   stored snapshot fields are not refreshed from `input`.
    /// - New id: the requested quantity is checked against the snapshot the
    ///   same way, so a line can never start above its stock limit and a
    ///   zero-stock item can never enter the cart.
    pub fn add_item(&mut self, input: CartLineInput, requested: i64) -> CartOutcome {
        if requested < 1 {
            return CartOutcome::NonPositiveQuantity { requested };
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == input.id) {
            let merged = line.quantity + requested;
            if merged > line.stock_limit {
                return CartOutcome::InsufficientStock {
                    id: line.id.clone(),
                    requested: merged,
                    stock_limit: line.stock_limit,
                };
            }
            line.quantity = merged;
            return CartOutcome::Merged {
                id: input.id,
                quantity: merged,
            };
        }

        if requested > input.stock_limit {
            return CartOutcome::InsufficientStock {
                id: input.id,
                requested,
                stock_limit: input.stock_limit,
            };
        }

        let id = input.id.clone();
        self.lines.push(CartLine::new(input, requested));
        CartOutcome::Added { id }
    }

    /// Sets the quantity of a line to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity < 1` → `NonPositiveQuantity`; this operation never
    ///   removes a line.
    /// - Id absent → `NotInCart` (silent no-op).
    /// - `quantity > stock_limit` → `InsufficientStock`, line unchanged.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CartOutcome {
        if quantity < 1 {
            return CartOutcome::NonPositiveQuantity {
                requested: quantity,
            };
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return CartOutcome::NotInCart { id: id.to_string() };
        };

        if quantity > line.stock_limit {
            return CartOutcome::InsufficientStock {
                id: line.id.clone(),
                requested: quantity,
                stock_limit: line.stock_limit,
            };
        }

        line.quantity = quantity;
        CartOutcome::Updated {
            id: id.to_string(),
            quantity,
        }
    }

    /// Removes the line with the given id, if present.
    ///
    /// Removing an absent id is a no-op, so the operation is idempotent.
    pub fn remove_item(&mut self, id: &str) -> CartOutcome {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);

        if self.lines.len() == before {
            CartOutcome::NotInCart { id: id.to_string() }
        } else {
            CartOutcome::Removed { id: id.to_string() }
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the line with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    ///
    /// Recomputed on every call; the cart holds tens of lines at most, so
    /// caching would buy nothing.
    pub fn total_item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price across all lines (unit price × quantity, summed).
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregate summary for header badges and the cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_item_count(),
            subtotal_cents: cart.total_price().kurus(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        let outcome = cart.add_item(input("p1", 5000, 3), 1);

        assert_eq!(outcome, CartOutcome::Added { id: "p1".into() });
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 1);
        assert_eq!(cart.total_price().kurus(), 5000);
    }

    #[test]
    fn test_add_same_id_merges_up_to_stock_limit() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 3), 1);

        // 1 + 2 = 3 == stock_limit → accepted
        let outcome = cart.add_item(input("p1", 5000, 3), 2);
        assert_eq!(
            outcome,
            CartOutcome::Merged {
                id: "p1".into(),
                quantity: 3
            }
        );
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity, 3);
    }

    #[test]
    fn test_merge_over_stock_limit_rejected_and_state_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 3), 1);
        cart.add_item(input("p1", 5000, 3), 2);
        let snapshot = cart.clone();

        // 3 + 1 = 4 > 3 → rejected
        let outcome = cart.add_item(input("p1", 5000, 3), 1);
        assert_eq!(
            outcome,
            CartOutcome::InsufficientStock {
                id: "p1".into(),
                requested: 4,
                stock_limit: 3
            }
        );
        assert!(outcome.is_rejection());
        assert!(!outcome.changed_state());
        assert_eq!(cart.lines(), snapshot.lines());
    }

    #[test]
    fn test_first_insert_over_stock_limit_rejected() {
        let mut cart = Cart::new();

        let outcome = cart.add_item(input("p1", 5000, 3), 5);
        assert_eq!(
            outcome,
            CartOutcome::InsufficientStock {
                id: "p1".into(),
                requested: 5,
                stock_limit: 3
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_zero_stock_item_never_enters_cart() {
        let mut cart = Cart::new();

        let outcome = cart.add_item(input("p1", 5000, 0), 1);
        assert!(outcome.is_rejection());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_non_positive_quantity_ignored() {
        let mut cart = Cart::new();

        assert_eq!(
            cart.add_item(input("p1", 5000, 3), 0),
            CartOutcome::NonPositiveQuantity { requested: 0 }
        );
        assert_eq!(
            cart.add_item(input("p1", 5000, 3), -2),
            CartOutcome::NonPositiveQuantity { requested: -2 }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_merge_keeps_original_snapshot_fields() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 1);

        // Re-add with a different price snapshot; only the quantity merges
        let mut repriced = input("p1", 9999, 10);
        repriced.name = "Renamed".to_string();
        cart.add_item(repriced, 1);

        let line = cart.get("p1").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price_cents, 5000);
        assert_eq!(line.name, "Product p1");
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(input("p1", 5000, 100), 1);
            cart.add_item(input("p2", 3000, 100), 1);
        }

        assert_eq!(cart.line_count(), 2);
        let mut ids: Vec<_> = cart.lines().iter().map(|l| l.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 100, 10), 1);
        cart.add_item(input("p2", 200, 10), 1);
        cart.add_item(input("p3", 300, 10), 1);
        cart.add_item(input("p1", 100, 10), 1); // merge must not reorder
        cart.remove_item("p2");

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 5), 1);

        let outcome = cart.update_quantity("p1", 4);
        assert_eq!(
            outcome,
            CartOutcome::Updated {
                id: "p1".into(),
                quantity: 4
            }
        );
        assert_eq!(cart.get("p1").unwrap().quantity, 4);
    }

    #[test]
    fn test_update_quantity_below_one_is_silent_noop() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 5), 2);

        assert_eq!(
            cart.update_quantity("p1", 0),
            CartOutcome::NonPositiveQuantity { requested: 0 }
        );
        // Never deleted via this path, quantity untouched
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_over_stock_rejected() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 5), 2);

        let outcome = cart.update_quantity("p1", 6);
        assert_eq!(
            outcome,
            CartOutcome::InsufficientStock {
                id: "p1".into(),
                requested: 6,
                stock_limit: 5
            }
        );
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_absent_id() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.update_quantity("ghost", 2),
            CartOutcome::NotInCart { id: "ghost".into() }
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 3), 1);

        assert_eq!(
            cart.remove_item("p1"),
            CartOutcome::Removed { id: "p1".into() }
        );
        assert!(cart.is_empty());

        // Second removal: same end state, reported as a no-op
        assert_eq!(
            cart.remove_item("p1"),
            CartOutcome::NotInCart { id: "p1".into() }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 2);
        cart.add_item(input("p2", 3000, 10), 1);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_aggregates() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 10), 2); // ₺50.00 × 2
        cart.add_item(input("p2", 3000, 10), 1); // ₺30.00 × 1

        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price().kurus(), 13000); // ₺130.00

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 13000);
    }

    #[test]
    fn test_aggregates_match_manual_sums_after_mixed_operations() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 1250, 20), 3);
        cart.add_item(input("p2", 999, 20), 5);
        cart.add_item(input("p3", 40000, 2), 1);
        cart.update_quantity("p2", 2);
        cart.remove_item("p3");
        cart.add_item(input("p1", 1250, 20), 1);

        let expected_qty: i64 = cart.lines().iter().map(|l| l.quantity).sum();
        let expected_total: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price_cents * l.quantity)
            .sum();

        assert_eq!(cart.total_item_count(), expected_qty);
        assert_eq!(cart.total_price().kurus(), expected_total);
    }

    #[test]
    fn test_from_lines_reestablishes_invariants() {
        fn line(id: &str, quantity: i64, stock_limit: i64) -> CartLine {
            CartLine {
                id: id.to_string(),
                name: format!("Product {}", id),
                unit_price_cents: 1000,
                image_url: None,
                quantity,
                stock_limit,
                slug: format!("product-{}", id),
                added_at: Utc::now(),
            }
        }

        // A hand-edited slot: duplicate id, over-stock quantity, zero stock,
        // non-positive quantity
        let cart = Cart::from_lines(vec![
            line("p1", 2, 5),
            line("p1", 1, 5),  // duplicate, dropped
            line("p2", 9, 3),  // clamped to 3
            line("p3", 1, 0),  // zero stock, dropped
            line("p4", 0, 10), // non-positive quantity, dropped
        ]);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(cart.get("p1").unwrap().quantity, 2);
        assert_eq!(cart.get("p2").unwrap().quantity, 3);
    }

    #[test]
    fn test_from_lines_keeps_valid_lines_untouched() {
        let mut cart = Cart::new();
        cart.add_item(input("p1", 5000, 5), 2);
        cart.add_item(input("p2", 3000, 5), 1);
        let persisted = cart.lines().to_vec();

        let restored = Cart::from_lines(persisted.clone());
        assert_eq!(restored.lines(), persisted.as_slice());
    }

    #[test]
    fn test_free_item_allowed() {
        // unit_price >= 0: zero-price promotional items are valid lines
        let mut cart = Cart::new();
        let outcome = cart.add_item(input("gift", 0, 1), 1);
        assert_eq!(outcome, CartOutcome::Added { id: "gift".into() });
        assert!(cart.total_price().is_zero());
        assert_eq!(cart.total_item_count(), 1);
    }
}
