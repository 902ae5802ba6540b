use crate::server::error::AppError;

/// Largest page size a listing returns.
pub const MAX_PER_PAGE: u64 = 100;

/// Highest zero-based page number a listing accepts.
pub const MAX_PAGE: u64 = 100_000;

/// Trims and lower-cases an email address, rejecting obviously invalid ones.
pub fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::BadRequest("Invalid email address".to_string())),
    }
}

/// Trims a required text field, rejecting it when empty.
pub fn require_non_empty(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(value.to_string())
}

/// Shared price and stock rules for products and events.
///
/// `discount_price` is the selling price and must be positive; `original_price`,
/// when present, is the struck-through price and may not be below it.
pub fn validate_pricing(
    original_price: Option<i64>,
    discount_price: i64,
    stock: i32,
) -> Result<(), AppError> {
    if discount_price <= 0 {
        return Err(AppError::BadRequest(
            "Discount price must be greater than zero".to_string(),
        ));
    }

    if stock < 0 {
        return Err(AppError::BadRequest("Stock cannot be negative".to_string()));
    }

    if let Some(original_price) = original_price {
        if original_price < discount_price {
            return Err(AppError::BadRequest(
                "Original price cannot be lower than the discount price".to_string(),
            ));
        }
    }

    Ok(())
}

/// Checks listing bounds: `per_page` in `1..=MAX_PER_PAGE`, `page <= MAX_PAGE`.
pub fn validate_page(page: u64, per_page: u64) -> Result<(), AppError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(AppError::BadRequest(format!(
            "Entries per page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }

    if page > MAX_PAGE {
        return Err(AppError::BadRequest(format!(
            "Page must not exceed {}",
            MAX_PAGE
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email_case_and_whitespace() {
        assert_eq!(
            normalize_email("  Alice@Example.COM ").unwrap(),
            "alice@example.com"
        );
        assert!(normalize_email("no-at-sign").is_err());
        assert!(normalize_email("@example.com").is_err());
    }

    #[test]
    fn pricing_rules() {
        assert!(validate_pricing(None, 100, 0).is_ok());
        assert!(validate_pricing(Some(100), 100, 5).is_ok());
        assert!(validate_pricing(Some(99), 100, 5).is_err());
        assert!(validate_pricing(None, 0, 5).is_err());
        assert!(validate_pricing(None, 100, -1).is_err());
    }

    #[test]
    fn page_bounds() {
        assert!(validate_page(0, 1).is_ok());
        assert!(validate_page(MAX_PAGE, MAX_PER_PAGE).is_ok());
        assert!(matches!(validate_page(0, 0), Err(AppError::BadRequest(_))));
        assert!(matches!(
            validate_page(0, MAX_PER_PAGE + 1),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate_page(u64::MAX, 10),
            Err(AppError::BadRequest(_))
        ));
    }
}
