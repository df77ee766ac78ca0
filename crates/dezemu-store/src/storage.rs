//! # Cart Storage
//!
//! The durable client storage boundary: a named slot holding the serialized
//! cart lines, written after every mutation and read once at startup.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storage Semantics                                  │
//! │                                                                         │
//! │  persist(lines) ── full snapshot, overwrites the slot                  │
//! │       │                                                                 │
//! │       └── may fail (quota, permissions); the store logs and keeps      │
//! │           its in-memory state — the session is never rolled back       │
//! │                                                                         │
//! │  load() ── read the slot once at startup                               │
//! │       ├── slot absent      → empty cart (first visit)                  │
//! │       ├── slot malformed   → empty cart, logged (never an error)       │
//! │       └── slot unreadable  → Err, caller degrades to empty cart        │
//! │                                                                         │
//! │  No versioning, no migrations: the slot is a cache of shopper intent,  │
//! │  not a system of record.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::warn;

use dezemu_core::cart::CartLine;

use crate::error::StorageError;

/// Name of the persisted cart slot. Changing it orphans existing carts.
pub const STORAGE_SLOT: &str = "cart-storage";

// =============================================================================
// Storage Trait
// =============================================================================

/// Durable client storage for the cart lines.
///
/// Implementations must treat `persist` as a full-snapshot overwrite and
/// `load` as a one-shot startup read.
pub trait CartStorage {
    /// Reads the persisted lines. Absent or malformed data is an empty
    /// vector, not an error; only genuine I/O failures are `Err`.
    fn load(&self) -> Result<Vec<CartLine>, StorageError>;

    /// Overwrites the slot with the given lines.
    fn persist(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}

// =============================================================================
// JSON Slot Storage
// =============================================================================

/// File-backed storage: one JSON document per slot.
///
/// The desktop/web-shell analog of a browser localStorage key: one named
/// slot holding one JSON document.
#[derive(Debug)]
pub struct JsonSlotStorage {
    path: PathBuf,
}

impl JsonSlotStorage {
    /// Creates a storage over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSlotStorage { path: path.into() }
    }

    /// Creates a storage at the platform's per-user app data directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.dezemu.shop/cart-storage.json`
    /// - **Windows**: `%APPDATA%\dezemu\shop\cart-storage.json`
    /// - **Linux**: `~/.local/share/dezemu-shop/cart-storage.json`
    ///
    /// ## Development Override
    /// Set `DEZEMU_STORAGE_PATH` to use a custom file path.
    pub fn in_app_data() -> Result<Self, StorageError> {
        if let Ok(path) = std::env::var("DEZEMU_STORAGE_PATH") {
            return Ok(JsonSlotStorage::new(path));
        }

        let proj_dirs =
            ProjectDirs::from("com", "dezemu", "shop").ok_or(StorageError::NoAppDir)?;

        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(JsonSlotStorage::new(
            data_dir.join(format!("{}.json", STORAGE_SLOT)),
        ))
    }

    /// The file backing this slot.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonSlotStorage {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // First visit: no slot yet
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<CartLine>>(&raw) {
            Ok(lines) => Ok(lines),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed cart slot, starting with an empty cart"
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        let json = serde_json::to_string(lines).map_err(StorageError::Serialize)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// In-memory storage for tests and ephemeral sessions (private browsing
/// analog: nothing survives the process).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lines: Mutex<Vec<CartLine>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a slot pre-filled with lines (rehydration tests).
    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        MemoryStorage {
            lines: Mutex::new(lines),
        }
    }

    /// Returns a copy of what is currently persisted.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.lock().expect("storage mutex poisoned").clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        Ok(self.snapshot())
    }

    fn persist(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        *self.lines.lock().expect("storage mutex poisoned") = lines.to_vec();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dezemu_core::cart::Cart;
    use dezemu_core::types::CartLineInput;

    fn sample_lines() -> Vec<CartLine> {
        let mut cart = Cart::new();
        cart.add_item(
            CartLineInput {
                id: "p1".to_string(),
                name: "Mug".to_string(),
                unit_price_cents: 5000,
                image_url: Some("https://img.example/mug.jpg".to_string()),
                stock_limit: 3,
                slug: "mug".to_string(),
            },
            2,
        );
        cart.lines().to_vec()
    }

    #[test]
    fn test_json_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonSlotStorage::new(dir.path().join("cart-storage.json"));

        storage.persist(&sample_lines()).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "p1");
        assert_eq!(loaded[0].quantity, 2);
        assert_eq!(loaded[0].unit_price_cents, 5000);
    }

    #[test]
    fn test_missing_slot_is_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonSlotStorage::new(dir.path().join("never-written.json"));

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_slot_is_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart-storage.json");
        fs::write(&path, "{not valid json at all").unwrap();

        let storage = JsonSlotStorage::new(&path);
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_persist_overwrites_full_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonSlotStorage::new(dir.path().join("cart-storage.json"));

        storage.persist(&sample_lines()).unwrap();
        storage.persist(&[]).unwrap();

        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());

        storage.persist(&sample_lines()).unwrap();
        assert_eq!(storage.load().unwrap().len(), 1);
        assert_eq!(storage.snapshot().len(), 1);
    }
}
