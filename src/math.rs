multiversx_sc::imports!();

use crate::config::WAD;

/// WAD multiplication, rounding half up.
pub fn wmul<M: ManagedTypeApi>(x: &BigUint<M>, y: &BigUint<M>) -> BigUint<M> {
    (x * y + BigUint::from(WAD / 2)) / WAD
}

/// WAD multiplication, rounding up.
pub fn wmul_up<M: ManagedTypeApi>(x: &BigUint<M>, y: &BigUint<M>) -> BigUint<M> {
    (x * y + BigUint::from(WAD - 1)) / WAD
}

/// Quadratic cost of a signed vote: `|votes|²` in WAD, rounded up so that
/// no nonzero vote is free.
pub fn quadratic_cost<M: ManagedTypeApi>(votes: &BigInt<M>) -> BigUint<M> {
    let magnitude = votes.magnitude();
    wmul_up(&magnitude, &magnitude)
}

pub fn min<M: ManagedTypeApi>(x: BigUint<M>, y: BigUint<M>) -> BigUint<M> {
    if x < y {
        x
    } else {
        y
    }
}

pub fn is_positive<M: ManagedTypeApi>(value: &BigInt<M>) -> bool {
    matches!(value.sign(), Sign::Plus)
}

pub fn is_zero<M: ManagedTypeApi>(value: &BigInt<M>) -> bool {
    matches!(value.sign(), Sign::NoSign)
}

/// True when both values are nonzero and point the same way.
pub fn same_direction<M: ManagedTypeApi>(x: &BigInt<M>, y: &BigInt<M>) -> bool {
    matches!(
        (x.sign(), y.sign()),
        (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus)
    )
}
