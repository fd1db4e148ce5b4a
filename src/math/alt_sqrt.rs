use crate::math::bit_math::base4_digit_count;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Approximates the root of a value with `c + 1` base-4 digits.
///
/// Second formulation of the digit-halving approximation, parameterized on
/// the digit count minus one instead of the digit count. The recursion depth
/// is logarithmic in the digit count (tens of frames for million-bit
/// operands), and `c` strictly decreases, so the call terminates. The output
/// satisfies the same unit-interval bracket as the primary fold.
fn approximate_on_pred(c: u64, n: &BigUint) -> BigUint {
    if c == 0 {
        return BigUint::one();
    }

    let k = (c - 1) >> 1;
    // Dropping the low `c - c/2` digits leaves a value with `c/2 + 1` digits.
    let dropped = c - (c >> 1);
    let sub = n >> (2 * dropped);
    let a = approximate_on_pred(c >> 1, &sub);

    let correction = (n >> (k + 2)) / &a;
    (a << k) + correction
}

/// Calculates the floor square root through the predecessor-split recursion.
/// Agrees with [`crate::math::sqrt::floor_sqrt`] on every input.
pub fn floor_sqrt_alt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }

    let a = approximate_on_pred(base4_digit_count(n) - 1, n);

    if &a * &a <= *n { a } else { a - 1u32 }
}
