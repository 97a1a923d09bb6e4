//! Decimal amount parsing.
//!
//! Amounts are typed as human decimals ("1.5") and stored in base units
//! (`1.5 * 10^18`). Anything that cannot be represented exactly in base units
//! is rejected as [`WidgetError::InvalidAmount`].

use crate::core::error::{Result, WidgetError};
use shared::U256;

/// Decimal places of the native asset and of every supported token
pub const ETH_DECIMAL_PLACES: u8 = 18;

/// Parse `raw` as a non-negative decimal and scale it by `10^decimals`.
///
/// Accepts plain decimals ("2.5", ".5", "3.") and exponent notation
/// ("1e3", "2.5E-1"). Rejects blank input, signs on the amount, separators,
/// values finer than one base unit and values that overflow 256 bits.
///
/// ```rust
/// use trade_widget::utils::units::parse_base_units;
/// use shared::U256;
///
/// assert_eq!(parse_base_units("2.5", 18).unwrap(), U256::from(2_500_000_000_000_000_000u128));
/// assert_eq!(parse_base_units("1e3", 0).unwrap(), U256::from(1000u64));
/// assert!(parse_base_units("-1", 18).is_err());
/// ```
pub fn parse_base_units(raw: &str, decimals: u8) -> Result<U256> {
    let trimmed = raw.trim();
    let invalid = || WidgetError::InvalidAmount(trimmed.to_string());

    let (mantissa, exponent) = match trimmed.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent).ok_or_else(invalid)?),
        None => (trimmed, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }

    let digits = format!("{}{}", whole, fraction);
    let significant = U256::from_str_radix(&digits, 10).map_err(|_| invalid())?;
    if significant.is_zero() {
        return Ok(U256::ZERO);
    }

    // base units = digits * 10^(decimals + exponent - fraction digits)
    let shift = i64::from(decimals) + exponent - fraction.len() as i64;
    if shift >= 0 {
        let factor = pow10(shift).ok_or_else(invalid)?;
        significant.checked_mul(factor).ok_or_else(invalid)
    } else {
        let divisor = pow10(-shift).ok_or_else(invalid)?;
        if !(significant % divisor).is_zero() {
            return Err(invalid());
        }
        Ok(significant / divisor)
    }
}

/// Exponent digits with an optional sign, bounded so scaling stays cheap
fn parse_exponent(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('+').or_else(|| raw.strip_prefix('-')).unwrap_or(raw);
    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// `10^exp`, or `None` once it no longer fits in 256 bits
fn pow10(exp: i64) -> Option<U256> {
    if exp > 77 {
        return None;
    }
    Some(U256::from(10u64).pow(U256::from(exp as u64)))
}

/// [`parse_base_units`] at [`ETH_DECIMAL_PLACES`].
pub fn parse_token_amount(raw: &str) -> Result<U256> {
    parse_base_units(raw, ETH_DECIMAL_PLACES)
}
