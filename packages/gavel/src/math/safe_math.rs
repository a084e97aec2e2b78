use core::panic::Location;

use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, GavelResult};

/// Overflow-checked arithmetic for the integer widths the contracts store:
/// `u64` timestamps, `u32` decimals and versions, `i128` token amounts.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> GavelResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> GavelResult<Self>;
    fn safe_pow(self, exp: u32, env: &Env) -> GavelResult<Self>;
}

#[track_caller]
fn checked<T>(result: Option<T>, env: &Env) -> GavelResult<T> {
    match result {
        Some(value) => Ok(value),
        None => {
            let caller = Location::caller();
            log!(
                env,
                "Math error thrown at {}:{}",
                caller.file(),
                caller.line()
            );
            Err(ErrorCode::MathError)
        }
    }
}

macro_rules! safe_math_impl {
    ($($t:ty),*) => {
        $(
            impl SafeMath for $t {
                #[track_caller]
                fn safe_add(self, rhs: $t, env: &Env) -> GavelResult<$t> {
                    checked(self.checked_add(rhs), env)
                }

                #[track_caller]
                fn safe_sub(self, rhs: $t, env: &Env) -> GavelResult<$t> {
                    checked(self.checked_sub(rhs), env)
                }

                #[track_caller]
                fn safe_pow(self, exp: u32, env: &Env) -> GavelResult<$t> {
                    checked(self.checked_pow(exp), env)
                }
            }
        )*
    };
}

safe_math_impl!(u32, u64, i128);

#[cfg(test)]
mod tests {
    use super::SafeMath;
    use crate::error::ErrorCode;
    use soroban_sdk::Env;

    #[test]
    fn deadline_addition_overflows_cleanly() {
        let env = Env::default();
        assert_eq!(1_700_000_000_u64.safe_add(86_400, &env), Ok(1_700_086_400));
        assert_eq!(u64::MAX.safe_add(1, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn payout_subtraction() {
        let env = Env::default();
        assert_eq!(10_000_i128.safe_sub(100, &env), Ok(9_900));
        assert_eq!(i128::MIN.safe_sub(1, &env), Err(ErrorCode::MathError));
        assert_eq!(0_u32.safe_sub(1, &env), Err(ErrorCode::MathError));
    }

    #[test]
    fn decimal_scale() {
        let env = Env::default();
        assert_eq!(10_i128.safe_pow(15, &env), Ok(1_000_000_000_000_000));
        assert_eq!(10_i128.safe_pow(39, &env), Err(ErrorCode::MathError));
        assert_eq!(u32::MAX.safe_add(1, &env), Err(ErrorCode::MathError));
    }
}
