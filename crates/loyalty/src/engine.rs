//! Core points engine: converts balances to redemption value, classifies
//! balances for the dashboard widget, formats transaction history, and
//! validates redemption requests before checkout submits them upstream.

use gasexpress_core::config::LoyaltyConfig;
use gasexpress_core::loyalty::*;
use tracing::{debug, info};

/// Loyalty points engine: stateless computation over balances and
/// transactions fetched by the surrounding application. Every operation
/// returns a structured value; out-of-range numeric inputs are clamped
/// to zero at the boundary instead of rejected.
pub struct PointsEngine {
    config: LoyaltyConfig,
}

impl PointsEngine {
    pub fn new(config: &LoyaltyConfig) -> Self {
        info!(
            enabled = config.enabled,
            min_redemption = config.min_redemption_points,
            step = config.redemption_step,
            points_per_order = config.points_per_order,
            "Points engine initialized"
        );
        Self {
            config: config.clone(),
        }
    }

    /// Redemption value of a points balance, in currency units. Rounds
    /// down to a multiple of the redemption step; points below the next
    /// step boundary are worth nothing. Negative balances value to 0.
    pub fn points_value(&self, points: i64) -> i64 {
        let step = (self.config.redemption_step as i64).max(1);
        points.max(0) / step * step
    }

    /// Points still missing before the balance becomes redeemable.
    /// Zero once the minimum is met.
    pub fn points_needed_for_redemption(&self, current_points: i64) -> i64 {
        let min = self.config.min_redemption_points as i64;
        (min - current_points.max(0)).max(0)
    }

    /// Whether a balance has reached the minimum redemption threshold.
    pub fn can_redeem(&self, points: i64) -> bool {
        points >= self.config.min_redemption_points as i64
    }

    /// Points earned by a completed order. Flat-rate program: the order
    /// amount is part of the signature for callers that display expected
    /// earnings alongside a total, but it does not change the result.
    pub fn order_points_earned(&self, _order_total: f64) -> i64 {
        self.config.points_per_order as i64
    }

    /// Referral bonus, awarded only on the referred customer's first order.
    pub fn referral_points_earned(&self, is_first_order: bool) -> i64 {
        if is_first_order {
            self.config.referral_bonus_points as i64
        } else {
            0
        }
    }

    /// Classify a balance for the dashboard widget.
    pub fn points_status(&self, points: i64) -> PointsStatus {
        let points = points.max(0);

        if points == 0 {
            return PointsStatus {
                kind: StatusKind::Info,
                message: "Place your first order to start earning loyalty points".to_string(),
                can_redeem: false,
            };
        }

        if !self.can_redeem(points) {
            let needed = self.points_needed_for_redemption(points);
            return PointsStatus {
                kind: StatusKind::Warning,
                message: format!("Earn {needed} more points to unlock redemption"),
                can_redeem: false,
            };
        }

        PointsStatus {
            kind: StatusKind::Success,
            message: format!(
                "Your points are worth {} off your next order",
                self.points_value(points)
            ),
            can_redeem: true,
        }
    }

    /// Project a transaction into its display form for the history
    /// widget. Passes `None` through, mirroring an absent record.
    pub fn format_transaction(
        &self,
        tx: Option<&PointsTransaction>,
    ) -> Option<FormattedTransaction> {
        let tx = tx?;
        let is_credit = tx.is_credit();
        let display_points = if is_credit {
            format!("+{}", tx.points)
        } else {
            tx.points.to_string()
        };

        Some(FormattedTransaction {
            id: tx.id,
            is_credit,
            display_points,
            points_value: self.points_value(tx.points.saturating_abs()),
            description: tx.description.clone(),
            display_date: tx.created_at.format("%d %b %Y, %I:%M %p").to_string(),
        })
    }

    /// Validate a redemption request against the balance and order it
    /// applies to. Checks run in order and the first failure wins.
    pub fn validate_redemption(&self, request: &RedemptionRequest) -> RedemptionValidation {
        let min = self.config.min_redemption_points as i64;
        let points = request.points_to_redeem.max(0);
        let available = request.available_points.max(0);

        if points < min {
            return self.reject(format!(
                "A minimum of {min} points is required to redeem"
            ));
        }

        if points > available {
            return self.reject(format!(
                "You only have {available} points available"
            ));
        }

        let value = self.points_value(points);
        if value as f64 > request.order_total {
            return self.reject(format!(
                "Points value of {value} exceeds the order total of {}",
                request.order_total
            ));
        }

        metrics::counter!("loyalty.redemptions_validated").increment(1);
        debug!(points, value, "Redemption validated");

        RedemptionValidation {
            is_valid: true,
            message: format!("Redeeming {points} points for a discount of {value}"),
        }
    }

    fn reject(&self, message: String) -> RedemptionValidation {
        metrics::counter!("loyalty.redemptions_rejected").increment(1);
        debug!(reason = %message, "Redemption rejected");
        RedemptionValidation {
            is_valid: false,
            message,
        }
    }

    pub fn config(&self) -> &LoyaltyConfig {
        &self.config
    }
}
