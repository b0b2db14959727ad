//! Monetary value checks shared by the account and transaction services.

use crate::error::AppError;
use rust_decimal::Decimal;

/// Decimal places stored by every `NUMERIC(19, 2)` money column.
pub const MONEY_SCALE: u32 = 2;

/// Reject values the database would have to round.
///
/// Trailing zeros are ignored, so `10.500` is accepted as `10.50`.
pub fn ensure_money_scale(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(AppError::BadRequest(format!(
            "{} must have at most {} decimal places",
            field, MONEY_SCALE
        )));
    }
    Ok(())
}
