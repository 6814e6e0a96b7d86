//! Fee splitting. Pure integer arithmetic, every division truncates.
//!
//! Rounding residue always lands with the registry owner: the fee is
//! `floor(price * rate / 1000)`, the caller kickback is `floor(fee / 4)` and the
//! registry owner keeps `fee - kickback`. The product owner gets `price - fee`.

use crate::types::{Error, FeeSplit};

/// Fee rates are in tenths of a percent.
pub const FEE_DENOMINATOR: i128 = 1000;

/// A renewal caller who is not the registry owner earns `fee / CALLER_SHARE_DIVISOR`.
pub const CALLER_SHARE_DIVISOR: i128 = 4;

/// `floor(price * fee_rate / 1000)`.
pub fn compute_fee(price: i128, fee_rate: u32) -> Result<i128, Error> {
    if price < 0 {
        return Err(Error::InvalidAmount);
    }
    price
        .checked_mul(fee_rate as i128)
        .map(|scaled| scaled / FEE_DENOMINATOR)
        .ok_or(Error::Overflow)
}

/// Split for the first payment of a subscription. No kickback, whoever calls.
pub fn split_first_payment(price: i128, fee_rate: u32) -> Result<FeeSplit, Error> {
    let fee = compute_fee(price, fee_rate)?;
    Ok(FeeSplit {
        owner_amount: price - fee,
        registry_amount: fee,
        caller_amount: 0,
    })
}

/// Split for a renewal triggered by `processPayment`.
///
/// When the registry owner triggers the renewal it already receives the whole
/// fee, so nothing is booked as kickback.
pub fn split_renewal(
    price: i128,
    fee_rate: u32,
    caller_is_registry_owner: bool,
) -> Result<FeeSplit, Error> {
    let fee = compute_fee(price, fee_rate)?;
    let caller_amount = if caller_is_registry_owner {
        0
    } else {
        fee / CALLER_SHARE_DIVISOR
    };
    Ok(FeeSplit {
        owner_amount: price - fee,
        registry_amount: fee - caller_amount,
        caller_amount,
    })
}
