use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Calculates the integer square root of a `BigUint`.
/// Uses the Babylonian method for iterative approximation.
pub fn newton_sqrt(x: &BigUint) -> BigUint {
    if x.is_zero() {
        return BigUint::zero();
    }
    // Initial guess is the power of 2 just above the root
    let mut z = BigUint::one() << ((x.bits() + 1) >> 1);
    loop {
        let next = (x / &z + &z) >> 1;
        if next >= z {
            return z;
        }
        z = next;
    }
}
