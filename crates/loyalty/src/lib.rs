//! Loyalty points engine: balance-to-currency conversion, status
//! messaging, transaction formatting, and redemption validation for the
//! storefront dashboard and checkout widgets.

pub mod engine;

pub use engine::PointsEngine;
