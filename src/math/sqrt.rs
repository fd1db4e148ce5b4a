use crate::errors::RootRsError;
use crate::math::bit_math::base4_digit_count;
use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

lazy_static! {
    // Largest value with a single base-4 digit; its floor root is 1.
    static ref SINGLE_DIGIT_MAX: BigUint = BigUint::from(3u32);
}

/// Runs the digit-halving approximation for a value with `budget` base-4
/// digits.
///
/// The descent schedule is precomputed top-down: a level with digit budget
/// `b >= 2` splits off its `k = b >> 1` low digits, and the next level works
/// on the value shifted right by the accumulated `2 * k` bits, which has
/// exactly `b - k` base-4 digits. The budget strictly decreases to 1, so the
/// schedule is finite. Folding back bottom-up rescales the inner result and
/// corrects it with a division against the next slice of the input:
///
///   a = (a_inner << (k - 1)) + (n_level >> (k + 1)) / a_inner
///
/// Every level's output brackets the true root of its sub-value m within an
/// open unit interval, `(a - 1)^2 < m < (a + 1)^2`, which also keeps every
/// divisor `a_inner` at least 1.
fn approximate(n: &BigUint, budget: u64) -> BigUint {
    if budget == 0 {
        return BigUint::zero();
    }

    // Descent: record (split width, bit offset of the level's sub-value).
    let mut levels: Vec<(u64, u64)> = Vec::new();
    let mut b = budget;
    let mut offset = 0u64;
    while b >= 2 {
        let k = b >> 1;
        levels.push((k, offset));
        offset += 2 * k;
        b -= k;
    }

    // The innermost sub-value has a single base-4 digit, so its root is 1.
    let mut a = BigUint::one();

    // Ascent: the inner approximation is produced before it is divided by.
    for &(k, offset) in levels.iter().rev() {
        let correction = (n >> (offset + k + 1)) / &a;
        a = (a << (k - 1)) + correction;
    }

    a
}

/// Calculates the floor square root of an arbitrary-precision unsigned
/// integer: the unique `d` with `d^2 <= n < (d + 1)^2`.
pub fn floor_sqrt(n: &BigUint) -> BigUint {
    // Handle single-digit values explicitly.
    if *n <= *SINGLE_DIGIT_MAX {
        return if n.is_zero() {
            BigUint::zero()
        } else {
            BigUint::one()
        };
    }

    let digits = base4_digit_count(n);
    tracing::trace!("floor_sqrt: {} bit input, {} base-4 digits", n.bits(), digits);

    let a = approximate(n, digits);

    // The approximation is within one of the true root on either side, so a
    // single check-and-decrement lands on the floor.
    if &a * &a <= *n { a } else { a - 1u32 }
}

/// Floor square root over signed arbitrary-precision integers.
/// A negative radicand is a domain error, rejected before any computation.
pub fn isqrt(n: &BigInt) -> Result<BigInt, RootRsError> {
    if n.sign() == Sign::Minus {
        return Err(RootRsError::InvalidArgument(format!(
            "cannot take the square root of negative value {}",
            n
        )));
    }
    Ok(BigInt::from(floor_sqrt(n.magnitude())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigInt, BigUint};

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_floor_sqrt_known_values() {
        assert_eq!(floor_sqrt(&big(0)), big(0));
        assert_eq!(floor_sqrt(&big(1)), big(1));
        assert_eq!(floor_sqrt(&big(2)), big(1));
        assert_eq!(floor_sqrt(&big(3)), big(1));
        assert_eq!(floor_sqrt(&big(4)), big(2));
        assert_eq!(floor_sqrt(&big(15)), big(3));
        assert_eq!(floor_sqrt(&big(16)), big(4));
        assert_eq!(floor_sqrt(&big(17)), big(4)); // floor
        assert_eq!(
            floor_sqrt(&BigUint::from(10u32).pow(18)),
            BigUint::from(10u32).pow(9)
        );
    }

    #[test]
    fn test_floor_sqrt_brackets_every_small_value() {
        for i in 0u64..=10_000 {
            let n = BigUint::from(i);
            let d = floor_sqrt(&n);
            assert!(&d * &d <= n, "root of {} overshoots", i);
            let next = &d + 1u32;
            assert!(&next * &next > n, "root of {} undershoots", i);
        }
    }

    #[test]
    fn test_floor_sqrt_perfect_squares() {
        for k in 0u64..=2_000 {
            assert_eq!(floor_sqrt(&BigUint::from(k * k)), BigUint::from(k));
        }
    }

    #[test]
    fn test_floor_sqrt_just_below_perfect_squares() {
        for k in 1u64..=2_000 {
            assert_eq!(floor_sqrt(&BigUint::from(k * k - 1)), BigUint::from(k - 1));
        }
    }

    #[test]
    fn test_isqrt_signed_values() {
        assert_eq!(isqrt(&BigInt::from(0)).unwrap(), BigInt::from(0));
        assert_eq!(isqrt(&BigInt::from(99)).unwrap(), BigInt::from(9));
        assert_eq!(isqrt(&BigInt::from(100)).unwrap(), BigInt::from(10));
    }

    #[test]
    fn test_isqrt_rejects_negative_input() {
        let err = isqrt(&BigInt::from(-4)).unwrap_err();
        assert!(matches!(err, RootRsError::InvalidArgument(_)));
    }
}
