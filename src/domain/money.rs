use super::error::DomainError;

const CENTS_PER_UNIT: f64 = 100.0;

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// Totals are accumulated unrounded and only pass through here when a
/// result record is projected.
pub fn round_to_cents(value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteAmount);
    }

    let rounded = (value * CENTS_PER_UNIT).round() / CENTS_PER_UNIT;

    // Adding zero turns -0.0 into 0.0
    Ok(rounded + 0.0)
}

/// Multiplier for a percentage discount (10 -> 0.9)
pub fn discount_factor(discount_percent: f64) -> f64 {
    1.0 - discount_percent / 100.0
}

/// Revenue of a single line item: price x quantity x (1 - discount/100)
pub fn line_revenue(sale_price: f64, quantity: f64, discount_percent: f64) -> f64 {
    sale_price * quantity * discount_factor(discount_percent)
}
