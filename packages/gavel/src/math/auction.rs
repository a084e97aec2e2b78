use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, Env};

use crate::{
    constants::BPS_DENOMINATOR,
    error::{ErrorCode, GavelResult},
};

use super::safe_math::SafeMath;

/// Settlement split of a winning bid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Payout {
    pub seller_amount: i128,
    pub fee: i128,
}

/// `floor(amount * fee_bps / 10_000)`
pub fn calculate_fee(env: &Env, amount: i128, fee_bps: u32) -> GavelResult<i128> {
    mul_div_floor(env, amount, fee_bps as i128, BPS_DENOMINATOR as i128)
}

pub fn calculate_payout(env: &Env, amount: i128, fee_bps: u32) -> GavelResult<Payout> {
    let fee = calculate_fee(env, amount, fee_bps)?;
    let seller_amount = amount.safe_sub(fee, env)?;

    Ok(Payout { seller_amount, fee })
}

/// USD value of a bid made in the native currency.
///
/// The native unit scale is collapsed together with the price scale, so the
/// result is expressed in whole dollars.
pub fn native_usd_value(
    env: &Env,
    amount: i128,
    price: i128,
    price_decimals: u32,
    native_decimals: u32,
) -> GavelResult<i128> {
    let scale = 10_i128.safe_pow(price_decimals.safe_add(native_decimals, env)?, env)?;
    mul_div_floor(env, amount, price, scale)
}

/// USD value of a bid made through the fungible ledger.
///
/// Only the price scale is removed; the token's minimal-unit granularity is
/// kept in the result.
pub fn fungible_usd_value(
    env: &Env,
    amount: i128,
    price: i128,
    price_decimals: u32,
) -> GavelResult<i128> {
    let scale = 10_i128.safe_pow(price_decimals, env)?;
    mul_div_floor(env, amount, price, scale)
}

#[track_caller]
fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> GavelResult<i128> {
    match x.fixed_mul_floor(y, denominator) {
        Some(result) => Ok(result),
        None => {
            log!(env, "Math error thrown at {}:{}", file!(), line!());
            Err(ErrorCode::MathError)
        }
    }
}
