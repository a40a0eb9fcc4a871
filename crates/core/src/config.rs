use serde::Deserialize;

use crate::error::GasExpressResult;

/// Root application configuration. Loaded from environment variables
/// with the prefix `GAS_EXPRESS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub loyalty: LoyaltyConfig,
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loyalty: LoyaltyConfig::default(),
            storefront: StorefrontConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> GasExpressResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("GAS_EXPRESS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

// ─── Loyalty Config ─────────────────────────────────────────────────────────

/// Loyalty program policy knobs. The defaults encode the live program:
/// 100-point redemption minimum, 10-point currency step, a flat 10 points
/// per completed order, and a 10-point referral bonus.
#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyConfig {
    #[serde(default = "default_loyalty_enabled")]
    pub enabled: bool,
    #[serde(default = "default_min_redemption_points")]
    pub min_redemption_points: u32,
    /// Points per currency unit of redemption value. Values round down
    /// to a multiple of this step.
    #[serde(default = "default_redemption_step")]
    pub redemption_step: u32,
    #[serde(default = "default_points_per_order")]
    pub points_per_order: u32,
    #[serde(default = "default_referral_bonus_points")]
    pub referral_bonus_points: u32,
}

fn default_loyalty_enabled() -> bool { true }
fn default_min_redemption_points() -> u32 { 100 }
fn default_redemption_step() -> u32 { 10 }
fn default_points_per_order() -> u32 { 10 }
fn default_referral_bonus_points() -> u32 { 10 }

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            enabled: default_loyalty_enabled(),
            min_redemption_points: default_min_redemption_points(),
            redemption_step: default_redemption_step(),
            points_per_order: default_points_per_order(),
            referral_bonus_points: default_referral_bonus_points(),
        }
    }
}

// ─── Storefront Config ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(default = "default_whatsapp_greeting")]
    pub whatsapp_greeting: String,
    /// On-hand quantity at or below which a product shows as low stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_whatsapp_number() -> String {
    "15550123456".to_string()
}
fn default_whatsapp_greeting() -> String {
    "Hello! I'd like to order a gas refill.".to_string()
}
fn default_low_stock_threshold() -> u32 { 5 }

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            whatsapp_greeting: default_whatsapp_greeting(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loyalty_defaults_encode_program_policy() {
        let config = LoyaltyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.min_redemption_points, 100);
        assert_eq!(config.redemption_step, 10);
        assert_eq!(config.points_per_order, 10);
        assert_eq!(config.referral_bonus_points, 10);
    }
}
