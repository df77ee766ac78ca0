//! # dezemu-store: The Stateful Cart Store
//!
//! This crate wraps the pure cart logic from `dezemu-core` with the effects
//! a running storefront needs: durable client storage, rehydration at
//! startup, and shopper-facing notices.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Store Data Flow                             │
//! │                                                                         │
//! │  UI event (add / update / remove)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  CartStore (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   Cart::add_item(...) ──► CartOutcome                           │   │
//! │  │                              │                                  │   │
//! │  │             ┌────────────────┼────────────────┐                 │   │
//! │  │             ▼                ▼                ▼                 │   │
//! │  │   state changed?      notice class?      return outcome         │   │
//! │  │        │                    │                                   │   │
//! │  │        ▼                    ▼                                   │   │
//! │  │   CartStorage          NoticeSink                               │   │
//! │  │   (best effort,        (presentation                            │   │
//! │  │    failures logged)     renders it)                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  In-memory state is the source of truth for the session; the persisted │
//! │  slot is a best-effort mirror for the next session.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`: session state, hydration flag, effects
//! - [`storage`] - `CartStorage` trait, JSON slot and in-memory backends
//! - [`notice`] - Notice classes and the `NoticeSink` presentation seam
//! - [`config`] - Store identity, currency, and shipping configuration
//! - [`error`] - Storage error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod notice;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::StorageError;
pub use notice::{Notice, NoticeSink, TracingNoticeSink};
pub use storage::{CartStorage, JsonSlotStorage, MemoryStorage, STORAGE_SLOT};
pub use store::CartStore;
