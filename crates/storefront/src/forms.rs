//! Order-form validation. Same contract as the points engine: structured
//! results with one message per failed field, never an error.

use serde::{Deserialize, Serialize};

/// Raw order form input as captured by the checkout widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderForm {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub quantity: i64,
}

/// Validation outcome, messages in form field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_order_form(form: &OrderForm) -> FormValidation {
    let mut errors = Vec::new();

    if form.customer_name.trim().chars().count() < 2 {
        errors.push("Please enter your full name".to_string());
    }

    let phone_digits = form.phone.chars().filter(char::is_ascii_digit).count();
    if phone_digits < 8 {
        errors.push("Please enter a valid phone number".to_string());
    }

    if form.address.trim().is_empty() {
        errors.push("Please enter a delivery address".to_string());
    }

    if form.quantity < 1 {
        errors.push("Quantity must be at least 1".to_string());
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OrderForm {
        OrderForm {
            customer_name: "Amina Bello".to_string(),
            phone: "+1 555 012 3456".to_string(),
            address: "14 Harbor Road".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let result = validate_order_form(&valid_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_form_collects_all_errors_in_order() {
        let result = validate_order_form(&OrderForm::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
        assert!(result.errors[0].contains("name"));
        assert!(result.errors[1].contains("phone"));
        assert!(result.errors[2].contains("address"));
        assert!(result.errors[3].contains("Quantity"));
    }

    #[test]
    fn test_single_bad_field() {
        let mut form = valid_form();
        form.phone = "call me".to_string();
        let result = validate_order_form(&form);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("phone"));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let mut form = valid_form();
        form.customer_name = "  A  ".to_string();
        assert!(!validate_order_form(&form).is_valid);
    }
}
