//! Storefront domain helpers: stock badge labeling, business-hours
//! lookup, WhatsApp contact links, and order-form validation.

pub mod contact;
pub mod forms;
pub mod hours;
pub mod stock;

pub use contact::WhatsappContact;
pub use hours::BusinessHours;
pub use stock::StockStatus;
