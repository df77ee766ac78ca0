//! # Shopper Notices
//!
//! Short-lived status messages emitted after cart mutations ("added to
//! cart", "not enough stock", ...).
//!
//! The store only decides the message *class*; rendering (toast, snackbar,
//! whatever the frontend uses) happens behind the [`NoticeSink`] seam.

use std::fmt;

use serde::Serialize;
use tracing::info;
use ts_rs::TS;

// =============================================================================
// Notice
// =============================================================================

/// The class of message to show the shopper after a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Notice {
    /// A new item entered the cart.
    Added { name: String },

    /// Re-adding an existing item increased its quantity.
    QuantityUpdated { name: String },

    /// An item was removed from the cart.
    Removed,

    /// The requested quantity exceeded the stock snapshot.
    InsufficientStock,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added { name } => write!(f, "{} added to your cart", name),
            Notice::QuantityUpdated { name } => write!(f, "{} quantity updated", name),
            Notice::Removed => write!(f, "Item removed from your cart"),
            Notice::InsufficientStock => write!(f, "Not enough stock for that quantity"),
        }
    }
}

// =============================================================================
// Notice Sink
// =============================================================================

/// Presentation seam: whatever renders shopper notices implements this.
pub trait NoticeSink {
    fn notify(&self, notice: Notice);
}

/// Default sink: logs notices instead of rendering them.
///
/// Used by headless tools (the seed binary) and as a stand-in until the
/// frontend registers its own sink.
#[derive(Debug, Default)]
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn notify(&self, notice: Notice) {
        info!(%notice, "cart notice");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let added = Notice::Added {
            name: "Mug".to_string(),
        };
        assert_eq!(added.to_string(), "Mug added to your cart");

        assert_eq!(
            Notice::InsufficientStock.to_string(),
            "Not enough stock for that quantity"
        );
    }

    #[test]
    fn test_serialized_kind_tags() {
        let json = serde_json::to_string(&Notice::Removed).unwrap();
        assert_eq!(json, r#"{"kind":"removed"}"#);

        let json = serde_json::to_string(&Notice::Added {
            name: "Mug".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"added","name":"Mug"}"#);
    }
}
