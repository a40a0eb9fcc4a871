//! Loyalty points domain types shared between the engine and the
//! storefront widgets that render balances, history, and checkout.
//!
//! Balances and transactions are owned by the remote account/points
//! service; everything here is a read-side projection of that data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Transactions ───────────────────────────────────────────────────────────

/// A historical points movement, recorded by the remote order service at
/// order-completion or redemption time. Immutable on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsTransaction {
    pub id: Uuid,
    /// Positive = earned, negative = redeemed.
    pub points: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl PointsTransaction {
    pub fn is_credit(&self) -> bool {
        self.points > 0
    }
}

/// Display-ready projection of a transaction for the history widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: Uuid,
    pub is_credit: bool,
    /// Signed points amount, `+`-prefixed on credits.
    pub display_points: String,
    /// Currency value of the absolute points amount.
    pub points_value: i64,
    pub description: String,
    /// Calendar date plus clock time, ready for the history list.
    pub display_date: String,
}

// ─── Balance Status ─────────────────────────────────────────────────────────

/// Visual treatment of a balance status on the dashboard widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Info,
    Warning,
    Success,
}

/// Balance classification rendered on the loyalty dashboard widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsStatus {
    pub kind: StatusKind,
    pub message: String,
    pub can_redeem: bool,
}

// ─── Redemption ─────────────────────────────────────────────────────────────

/// A redemption attempt evaluated at checkout before the surrounding
/// application submits it to the order service. Never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionRequest {
    pub points_to_redeem: i64,
    pub available_points: i64,
    pub order_total: f64,
}

/// Outcome of validating a redemption request. Always structured, never
/// an error: callers branch on `is_valid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionValidation {
    pub is_valid: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&StatusKind::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_transaction_credit_detection() {
        let mut tx = PointsTransaction {
            id: Uuid::new_v4(),
            points: 10,
            description: "Order completed".to_string(),
            created_at: Utc::now(),
        };
        assert!(tx.is_credit());

        tx.points = -30;
        assert!(!tx.is_credit());

        tx.points = 0;
        assert!(!tx.is_credit());
    }
}
