//! # Shared Utility Functions
//!
//! Display helpers used by the widget and its host.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the default `0x1234...abcd` shape
//!
//! ## Amount Formatting
//!
//! - [`format_token_amount`] - Render a base-unit amount as a decimal string
//!
//! ```rust
//! use shared::utils::{format_address, format_token_amount};
//! use shared::U256;
//!
//! let address = "0x5409ed021d9299bf6814279a6a1411a7e866a631";
//! assert_eq!(format_address(address, 6, 4), "0x5409...a631");
//!
//! let one_and_a_half = U256::from(1_500_000_000_000_000_000u128);
//! assert_eq!(format_token_amount(one_and_a_half, 18, 4), "1.5");
//! ```

use alloy_primitives::U256;

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5409ed021d9299bf6814279a6a1411a7e866a631";
/// assert_eq!(format_address(addr, 6, 4), "0x5409...a631");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Hex addresses are ASCII-only, byte indexing is safe
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four characters, an ellipsis and the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Render `amount` (in base units) as a decimal string with at most
/// `max_fraction_digits` fractional digits. Trailing zeros are dropped and
/// the value is truncated, never rounded up.
pub fn format_token_amount(amount: U256, decimals: u8, max_fraction_digits: usize) -> String {
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / scale;
    let fraction = amount % scale;

    if fraction.is_zero() || max_fraction_digits == 0 {
        return whole.to_string();
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let shown: String = padded.chars().take(max_fraction_digits).collect();
    let shown = shown.trim_end_matches('0');

    if shown.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, shown)
    }
}
