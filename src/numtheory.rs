//! Number-theoretic helpers used to keep [`Rational`](crate::rational::Rational) values reduced and
//! to line up denominators before combining them.

use num_traits::PrimInt;

/// Greatest common divisor by Euclid's algorithm. Inputs are expected to be non-negative: callers
/// pass magnitudes. `gcd(n, 0) == n`.
pub fn gcd<T: PrimInt>(p: T, q: T) -> T {
    let mut p = p;
    let mut q = q;
    while !q.is_zero() {
        let r = p % q;
        p = q;
        q = r;
    }

    p
}

/// Least common denominator: the smallest positive integer divisible by both `a` and `b`, which
/// must be positive.
///
/// Divides before multiplying, so this only overflows when the result itself does not fit in `T`.
pub fn lcd<T: PrimInt>(a: T, b: T) -> T {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 24), 4);
        assert_eq!(gcd(25, 4), 1);
        assert_eq!(gcd(25, 10), 5);
        assert_eq!(gcd(64, 8), 8);
        assert_eq!(gcd(8, 64), 8);
    }

    #[test]
    fn test_gcd_zero() {
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0i64, 0), 0);
    }

    #[test]
    fn test_lcd() {
        assert_eq!(lcd(3, 3), 3);
        assert_eq!(lcd(7, 9), 63);
        assert_eq!(lcd(4, 6), 12);
        assert_eq!(lcd(8, 4), 8);
        assert_eq!(lcd(1, 5), 5);
    }

    #[test]
    fn test_lcd_large_coprime() {
        // the incremental search never gets here in reasonable time
        let (a, b) = (2_147_483_647i64, 2_147_483_646i64);
        assert_eq!(lcd(a, b), a * b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]
        #[test]
        fn test_gcd_divides(p in 0i64..100_000, q in 1i64..100_000) {
            let g = gcd(p, q);
            prop_assert!(g > 0);
            prop_assert_eq!(p % g, 0);
            prop_assert_eq!(q % g, 0);
            prop_assert_eq!(gcd(p / g, q / g), 1);
        }

        #[test]
        fn test_lcd_is_least_common_multiple(a in 1i64..10_000, b in 1i64..10_000) {
            let l = lcd(a, b);
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
            prop_assert_eq!(l * gcd(a, b), a * b);
        }
    }
}
