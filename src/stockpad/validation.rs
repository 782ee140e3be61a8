//! # Form Validation
//!
//! Both product forms (create and edit) share one rule set. Checks run in a
//! fixed order and the first failure wins, so the message a user sees depends
//! on that order:
//!
//! 1. name, price and quantity must all be present
//! 2. price and quantity must be positive
//! 3. price and quantity must be numbers
//!
//! Numbers are read the way a browser form reads them: the longest numeric
//! prefix counts (`"9.99 each"` is 9.99) and quantity keeps only its integer
//! part (`"5.7"` is 5). A field with no numeric prefix at all is not a number,
//! which is why check 2 cannot catch it and check 3 exists.
//!
//! Only the name is trimmed before the presence check. Price and quantity
//! count as present when their raw text is non-empty, so a field holding only
//! spaces fails check 3 rather than check 1.

use crate::model::{Product, ProductDraft};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all required fields (Name, Price, Quantity).")]
    MissingFields,

    #[error("Price and Quantity must be positive numbers.")]
    NotPositive,

    #[error("Price and Quantity must be valid numbers.")]
    NotANumber,
}

/// Raw text of the five product form fields, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub image_url: String,
}

impl ProductForm {
    /// Fills the form from a stored record, as the edit flow does.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            image_url: product.image_url.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

pub fn validate(form: &ProductForm) -> Result<ProductDraft, ValidationError> {
    let name = form.name.trim();

    if name.is_empty() || form.price.is_empty() || form.quantity.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let price = parse_leading_float(form.price.trim()).filter(|p| !p.is_nan());
    let quantity = parse_leading_int(form.quantity.trim());

    if price.is_some_and(|p| p <= 0.0) || quantity.is_some_and(|q| q <= 0) {
        return Err(ValidationError::NotPositive);
    }

    let price = price
        .filter(|p| p.is_finite())
        .ok_or(ValidationError::NotANumber)?;
    let quantity = quantity
        .and_then(|q| u32::try_from(q).ok())
        .ok_or(ValidationError::NotANumber)?;

    Ok(ProductDraft {
        name: name.to_string(),
        description: form.description.trim().to_string(),
        price,
        quantity,
        image_url: form.image_url.trim().to_string(),
    })
}

/// Longest prefix of `s` that reads as a decimal number, if any.
fn parse_leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits of its own
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Longest prefix of `s` that reads as an integer, if any.
fn parse_leading_int(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, quantity: &str) -> ProductForm {
        ProductForm {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_form_and_trims_text() {
        let mut input = form("  Widget ", "9.99", "5");
        input.description = "  small  ".into();
        input.image_url = " http://img/w.png ".into();

        let draft = validate(&input).unwrap();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.description, "small");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.quantity, 5);
        assert_eq!(draft.image_url, "http://img/w.png");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            validate(&form("   ", "1", "1")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn rejects_missing_price_or_quantity() {
        assert_eq!(
            validate(&form("A", "", "1")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate(&form("A", "1", "")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn spaces_only_numbers_are_not_numbers() {
        assert_eq!(
            validate(&form("A", "   ", "1")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate(&form("A", "1", " ")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        assert_eq!(
            validate(&form("A", "0", "1")),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(
            validate(&form("A", "-3.5", "1")),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(
            validate(&form("A", "1", "0")),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(
            validate(&form("A", "1", "-2")),
            Err(ValidationError::NotPositive)
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(
            validate(&form("A", "abc", "1")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate(&form("A", "1", "many")),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate(&form("A", "inf", "1")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn sign_check_runs_before_number_check() {
        // A negative price wins over a garbage quantity
        assert_eq!(
            validate(&form("A", "-1", "abc")),
            Err(ValidationError::NotPositive)
        );
    }

    #[test]
    fn reads_numeric_prefixes() {
        let draft = validate(&form("A", "12.50 USD", "5.7")).unwrap();
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.quantity, 5);

        let draft = validate(&form("A", ".5", "3 boxes")).unwrap();
        assert_eq!(draft.price, 0.5);
        assert_eq!(draft.quantity, 3);

        // Fractional quantity below one truncates to zero
        assert_eq!(
            validate(&form("A", "1", "0.9")),
            Err(ValidationError::NotPositive)
        );
    }

    #[test]
    fn exponent_needs_digits() {
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
        assert_eq!(parse_leading_float("2e"), Some(2.0));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
    }

    #[test]
    fn quantity_out_of_range_is_not_a_number() {
        assert_eq!(
            validate(&form("A", "1", "99999999999")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn validation_leaves_form_untouched() {
        let input = form("", "0", "x");
        let before = input.clone();
        let _ = validate(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn form_round_trips_through_product() {
        let product = Product::from_draft(
            crate::model::ProductId(1),
            ProductDraft::new("Widget", 12.5, 4).with_description("blue"),
        );
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "12.5");
        assert_eq!(form.quantity, "4");
        let draft = validate(&form).unwrap();
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.description, "blue");
    }
}
