//! # Cart Store
//!
//! The session-scoped cart store: owns the in-memory cart, hydrates it from
//! durable storage once at startup, and after every mutation decides whether
//! to persist and which notice class the shopper should see.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Cart Store Lifecycle                                │
//! │                                                                         │
//! │  CartStore::new() ──► hydrate() ──► mutations... ──► clear()/drop       │
//! │        │                  │              │                              │
//! │        │                  │              └─► persist after each state   │
//! │        │                  │                  change (best effort)       │
//! │        │                  │                                             │
//! │        │                  └─► load slot → Cart::from_lines              │
//! │        │                      read failure → empty cart, logged         │
//! │        │                      EITHER way: hydrated = true               │
//! │        │                                                                │
//! │        └─► hydrated = false: UI renders a skeleton, not an empty cart   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-writer model: one store per session, behind whatever lock the
//! embedding shell already uses for its state. The store itself takes
//! `&mut self` and needs no internal locking.

use chrono::Utc;
use tracing::{debug, warn};

use dezemu_core::cart::{Cart, CartLine, CartOutcome, CartTotals};
use dezemu_core::checkout::{CustomerDetails, OrderDraft, PaymentMethod};
use dezemu_core::money::Money;
use dezemu_core::types::CartLineInput;
use dezemu_core::CoreResult;

use crate::config::StoreConfig;
use crate::notice::{Notice, NoticeSink};
use crate::storage::CartStorage;

// =============================================================================
// Cart Store
// =============================================================================

/// The stateful cart store for one shopper session.
///
/// Wraps the pure [`Cart`] with hydration, best-effort persistence, and
/// shopper notices. In-memory state is the source of truth: a failed
/// persistence write is logged and swallowed, never rolled back.
pub struct CartStore {
    cart: Cart,
    hydrated: bool,
    storage: Box<dyn CartStorage>,
    notices: Box<dyn NoticeSink>,
    config: StoreConfig,
}

impl CartStore {
    /// Creates a store with the default configuration. The cart starts
    /// empty and un-hydrated; call [`hydrate`](Self::hydrate) before
    /// rendering cart contents.
    pub fn new(storage: Box<dyn CartStorage>, notices: Box<dyn NoticeSink>) -> Self {
        CartStore::with_config(storage, notices, StoreConfig::default())
    }

    /// Creates a store with an explicit configuration.
    pub fn with_config(
        storage: Box<dyn CartStorage>,
        notices: Box<dyn NoticeSink>,
        config: StoreConfig,
    ) -> Self {
        CartStore {
            cart: Cart::new(),
            hydrated: false,
            storage,
            notices,
            config,
        }
    }

    // =========================================================================
    // Hydration
    // =========================================================================

    /// Loads the persisted cart into memory, once per session.
    ///
    /// ## Behavior
    /// - Already hydrated → no-op (the slot is read exactly once).
    /// - Read failure → empty cart, logged. The shopper can keep shopping;
    ///   losing a stale cart beats blocking the session.
    /// - In every case the store ends up hydrated, so the UI can stop
    ///   rendering its loading skeleton.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        match self.storage.load() {
            Ok(lines) => {
                debug!(line_count = lines.len(), "cart hydrated from storage");
                self.cart = Cart::from_lines(lines);
            }
            Err(e) => {
                warn!(error = %e, "cart hydration failed, starting empty");
                self.cart = Cart::new();
            }
        }

        self.hydrated = true;
    }

    /// Whether the persisted cart has been loaded yet.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds an item to the cart and runs the persistence/notice effects.
    pub fn add_item(&mut self, input: CartLineInput, quantity: i64) -> CartOutcome {
        let name = input.name.clone();
        let outcome = self.cart.add_item(input, quantity);
        self.react(&outcome, name);
        outcome
    }

    /// Sets a line's quantity and runs the persistence/notice effects.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CartOutcome {
        let name = self.cart.get(id).map(|l| l.name.clone()).unwrap_or_default();
        let outcome = self.cart.update_quantity(id, quantity);
        self.react(&outcome, name);
        outcome
    }

    /// Removes a line and runs the persistence/notice effects.
    pub fn remove_item(&mut self, id: &str) -> CartOutcome {
        let name = self.cart.get(id).map(|l| l.name.clone()).unwrap_or_default();
        let outcome = self.cart.remove_item(id);
        self.react(&outcome, name);
        outcome
    }

    /// Empties the cart (order placed, or shopper cleared it) and persists
    /// the empty state. No notice: the surrounding flow reports its own
    /// confirmation.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist_best_effort();
    }

    /// Persist-and-notify dispatch shared by every mutation.
    fn react(&mut self, outcome: &CartOutcome, name: String) {
        if outcome.changed_state() {
            self.persist_best_effort();
        }

        let notice = match outcome {
            CartOutcome::Added { .. } => Some(Notice::Added { name }),
            CartOutcome::Merged { .. } => Some(Notice::QuantityUpdated { name }),
            CartOutcome::Removed { .. } => Some(Notice::Removed),
            CartOutcome::InsufficientStock { .. } => Some(Notice::InsufficientStock),
            // Quantity edits and no-ops are silent
            CartOutcome::Updated { .. }
            | CartOutcome::NonPositiveQuantity { .. }
            | CartOutcome::NotInCart { .. } => None,
        };

        if let Some(notice) = notice {
            self.notices.notify(notice);
        }
    }

    /// Mirrors the in-memory cart into the slot. Failures are logged and
    /// swallowed: the session keeps its state either way.
    fn persist_best_effort(&self) {
        if let Err(e) = self.storage.persist(self.cart.lines()) {
            warn!(error = %e, "cart persistence failed, keeping in-memory state");
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Aggregate summary for header badges and the cart view.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    /// Total quantity across all lines.
    pub fn total_item_count(&self) -> i64 {
        self.cart.total_item_count()
    }

    /// Total price across all lines.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The store configuration this session runs with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Builds an order draft from the current cart and the shopper's
    /// details, using the configured flat shipping rate.
    ///
    /// The cart is NOT cleared here; the caller clears it only after the
    /// order is accepted downstream.
    pub fn draft_order(
        &self,
        customer: CustomerDetails,
        payment_method: PaymentMethod,
    ) -> CoreResult<OrderDraft> {
        OrderDraft::from_cart(
            &self.cart,
            customer,
            payment_method,
            Money::from_kurus(self.config.shipping_flat_cents),
            Utc::now(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
