use std::cmp::min;

use num_traits::PrimInt;

// Division where the quotient is clamped to a known maximum and the remainder
// absorbs the overflow. Calendar periods that end with their irregular element
// (a leap day, a deferred leap year) divide cleanly this way: every sub-period
// but the last has the same length, and the clamp keeps the final, longer
// sub-period from overflowing into a period that does not exist.
pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    type Quotient;
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    type Quotient = Q;
    fn clamped_div_rem(self, divisor: T, max_quotient: Self::Quotient) -> (Self::Quotient, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        let quotient: Self::Quotient = match quotient.try_into() {
            Ok(x) => x,
            Err(_) => panic!("quotient is too large"),
        };
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotient_below_clamp_behaves_like_div_rem() {
        let (q, r): (u8, u32) = 250_u32.clamped_div_rem(100, 3_u8);
        assert_eq!(q, 2);
        assert_eq!(r, 50);
    }

    #[test]
    fn quotient_at_clamp_spills_into_remainder() {
        let (q, r): (u8, u32) = 400_u32.clamped_div_rem(100, 3_u8);
        assert_eq!(q, 3);
        assert_eq!(r, 100);
    }
}
