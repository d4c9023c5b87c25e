//! An exact rational number type. Values are always stored in lowest terms, with a strictly
//! positive denominator and the sign carried by the numerator, so two values are equal exactly
//! when their components are.

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Num, One, Signed, Zero};
use std::{
    cmp::Ordering,
    fmt::Display,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

use crate::numtheory::{gcd, lcd};
use crate::parsing::{self, ParseRationalError};

/// The integer type used to store numerators and denominators.
pub type BaseInt = i32;

/// The integer type intermediate results are computed in. Any product or cross-scaled sum of two
/// [`BaseInt`] values fits, so overflow can only happen when a reduced result is narrowed back.
pub type WideInt = i64;

/// A fraction `numerator / denominator` in canonical form: `gcd(|numerator|, denominator) == 1`,
/// `denominator > 0`, and zero is always `0/1`.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct Rational {
    numerator: BaseInt,
    denominator: BaseInt,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RationalError {
    #[error("Invalid denominator: a rational number cannot have a denominator of zero")]
    InvalidDenominator,
}

impl Rational {
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    pub const NEG_ONE: Rational = Rational {
        numerator: -1,
        denominator: 1,
    };

    pub const ONE_HALF: Rational = Rational {
        numerator: 1,
        denominator: 2,
    };

    /// Creates the rational `numerator / denominator`, reduced to lowest terms. Any zero numerator
    /// gives [`Rational::ZERO`].
    ///
    /// # Errors
    /// [`RationalError::InvalidDenominator`] if `denominator` is zero, whatever the numerator.
    ///
    /// # Panics
    /// If the reduced value does not fit in [`BaseInt`], which only happens for `BaseInt::MIN` in
    /// a position where the sign has to be flipped, e.g. `Rational::new(BaseInt::MIN, -1)`.
    pub fn new(numerator: BaseInt, denominator: BaseInt) -> Result<Self, RationalError> {
        Self::normalize(numerator.into(), denominator.into())
    }

    /// The numerator, which carries the sign.
    pub const fn numerator(&self) -> BaseInt {
        self.numerator
    }

    /// The denominator, which is always positive.
    pub const fn denominator(&self) -> BaseInt {
        self.denominator
    }

    /// Replaces the numerator, keeping the current denominator, and reduces the result. A zero
    /// numerator collapses to [`Rational::ZERO`].
    pub fn set_numerator(&mut self, numerator: BaseInt) {
        *self = Self::reduced(numerator.into(), self.denominator.into());
    }

    /// Replaces the denominator, keeping the current numerator, and reduces the result. On error
    /// `self` is left unchanged.
    pub fn set_denominator(&mut self, denominator: BaseInt) -> Result<(), RationalError> {
        *self = Self::normalize(self.numerator.into(), denominator.into())?;
        Ok(())
    }

    /// Replaces both components, with the same rules as [`Rational::new`]. On error `self` is left
    /// unchanged.
    pub fn set(&mut self, numerator: BaseInt, denominator: BaseInt) -> Result<(), RationalError> {
        *self = Self::new(numerator, denominator)?;
        Ok(())
    }

    /// Whether this is anything other than zero.
    pub fn is_nonzero(&self) -> bool {
        !(self.numerator == 0 && self.denominator == 1)
    }

    /// Whether the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn try_div(self, rhs: Self) -> Result<Self, RationalError> {
        Self::normalize(
            WideInt::from(self.numerator) * WideInt::from(rhs.denominator),
            WideInt::from(self.denominator) * WideInt::from(rhs.numerator),
        )
    }

    /// In-place form of [`Rational::try_div`]. On error `self` is left unchanged.
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), RationalError> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    /// The multiplicative inverse. Zero has none.
    pub fn recip(self) -> Result<Self, RationalError> {
        Self::normalize(self.denominator.into(), self.numerator.into())
    }

    /// Rounds toward zero.
    pub fn trunc(self) -> Self {
        Self::from(self.numerator / self.denominator)
    }

    /// Rounds toward negative infinity.
    pub fn floor(self) -> Self {
        let floor = WideInt::from(self.numerator).div_euclid(self.denominator.into());
        Self::from_reduced(floor, 1)
    }

    /// Rounds toward positive infinity.
    pub fn ceil(self) -> Self {
        let floor = WideInt::from(self.numerator).div_euclid(self.denominator.into());
        if self.is_integer() {
            Self::from_reduced(floor, 1)
        } else {
            Self::from_reduced(floor + 1, 1)
        }
    }

    /// The common denominator of `self` and `other`, along with both numerators scaled to it.
    /// Equal denominators are reused as is.
    fn over_common_denominator(&self, other: &Self) -> (WideInt, WideInt, WideInt) {
        let (n1, d1) = (WideInt::from(self.numerator), WideInt::from(self.denominator));
        let (n2, d2) = (WideInt::from(other.numerator), WideInt::from(other.denominator));
        if d1 == d2 {
            return (n1, n2, d1);
        }

        let d = lcd(d1, d2);
        (n1 * (d / d1), n2 * (d / d2), d)
    }

    /// Rejects a zero denominator, then reduces.
    fn normalize(numerator: WideInt, denominator: WideInt) -> Result<Self, RationalError> {
        if denominator == 0 {
            Err(RationalError::InvalidDenominator)
        } else {
            Ok(Self::reduced(numerator, denominator))
        }
    }

    /// Reduces `numerator / denominator` to canonical form. `denominator` must be nonzero.
    ///
    /// # Panics
    /// If the reduced value does not fit in [`BaseInt`].
    fn reduced(numerator: WideInt, denominator: WideInt) -> Self {
        Self::checked_reduced(numerator, denominator)
            .unwrap_or_else(|| Self::overflow(numerator, denominator))
    }

    /// Like [`Rational::reduced`], but `None` if the reduced value does not fit in [`BaseInt`].
    fn checked_reduced(numerator: WideInt, denominator: WideInt) -> Option<Self> {
        debug_assert!(denominator != 0);
        if numerator == 0 {
            return Some(Self::ZERO);
        }

        let g = gcd(numerator.abs(), denominator.abs());
        let (n, d) = (numerator / g, denominator / g);
        if d < 0 {
            Self::narrowed(-n, -d)
        } else {
            Self::narrowed(n, d)
        }
    }

    /// Narrows already-canonical components to [`BaseInt`].
    fn narrowed(numerator: WideInt, denominator: WideInt) -> Option<Self> {
        Some(Self {
            numerator: BaseInt::try_from(numerator).ok()?,
            denominator: BaseInt::try_from(denominator).ok()?,
        })
    }

    fn overflow(numerator: WideInt, denominator: WideInt) -> ! {
        panic!(
            "Cannot represent {}/{} with {}-bit components",
            numerator,
            denominator,
            BaseInt::BITS
        )
    }

    /// Narrows already-canonical components to [`BaseInt`], panicking if they do not fit.
    fn from_reduced(numerator: WideInt, denominator: WideInt) -> Self {
        Self::narrowed(numerator, denominator)
            .unwrap_or_else(|| Self::overflow(numerator, denominator))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<BaseInt> for Rational {
    fn from(n: BaseInt) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        (value.numerator as f64) / (value.denominator as f64)
    }
}

impl From<Rational> for f32 {
    fn from(value: Rational) -> Self {
        (value.numerator as f32) / (value.denominator as f32)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `n/d`, allowing surrounding whitespace. Unlike [`parsing::RationalStream`], the
    /// separator must be a slash and nothing may follow the denominator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsing::parse_complete(s, 10)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so scaling preserves the order of the numerators
        let (lhs, rhs, _) = self.over_common_denominator(other);
        lhs.cmp(&rhs)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let (lhs, rhs, d) = self.over_common_denominator(&rhs);
        Self::reduced(lhs + rhs, d)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let (lhs, rhs, d) = self.over_common_denominator(&rhs);
        Self::reduced(lhs - rhs, d)
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduced(
            WideInt::from(self.numerator) * WideInt::from(rhs.numerator),
            WideInt::from(self.denominator) * WideInt::from(rhs.denominator),
        )
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    /// If `rhs` is zero. Use [`Rational::try_div`] to get [`RationalError::InvalidDenominator`]
    /// instead.
    fn div(self, rhs: Self) -> Self::Output {
        self.try_div(rhs)
            .unwrap_or_else(|e| panic!("Cannot divide {} by {}: {}", self, rhs, e))
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Rem for Rational {
    type Output = Self;

    /// The remainder of truncated division: `self - rhs * (self / rhs).trunc()`, which has the
    /// sign of `self`. Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        self - rhs * (self / rhs).trunc()
    }
}

impl RemAssign for Rational {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_reduced(-WideInt::from(self.numerator), self.denominator.into())
    }
}

macro_rules! forward_ref_binop {
    ($($imp:ident $method:ident),*) => {$(
        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &'a Rational) -> Rational {
                $imp::$method(self, *rhs)
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(*self, rhs)
            }
        }

        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: &'b Rational) -> Rational {
                $imp::$method(*self, *rhs)
            }
        }
    )*};
}

forward_ref_binop!(Add add, Sub sub, Mul mul, Div div, Rem rem);

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        let (lhs, rhs, d) = self.over_common_denominator(v);
        Self::checked_reduced(lhs + rhs, d)
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        let (lhs, rhs, d) = self.over_common_denominator(v);
        Self::checked_reduced(lhs - rhs, d)
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Self::checked_reduced(
            WideInt::from(self.numerator) * WideInt::from(v.numerator),
            WideInt::from(self.denominator) * WideInt::from(v.denominator),
        )
    }
}

impl CheckedDiv for Rational {
    /// `None` if `v` is zero or the quotient does not fit.
    fn checked_div(&self, v: &Self) -> Option<Self> {
        if v.is_zero() {
            return None;
        }

        Self::checked_reduced(
            WideInt::from(self.numerator) * WideInt::from(v.denominator),
            WideInt::from(self.denominator) * WideInt::from(v.numerator),
        )
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Num for Rational {
    type FromStrRadixErr = ParseRationalError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        parsing::parse_complete(str, radix)
    }
}

impl Signed for Rational {
    fn abs(&self) -> Self {
        if self.numerator < 0 {
            -*self
        } else {
            *self
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Self {
        Self::from(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl std::fmt::Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rat!({}/{})", self.numerator, self.denominator)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Builds a [`Rational`] from literals: `rat!(3 / 4)`, `rat!(-3 / 4)` or `rat!(2)`. Panics on a
/// zero denominator, so use [`Rational::new`] for values that aren't known to be valid.
#[macro_export]
macro_rules! rat {
    ($num:literal / $denom:expr) => {{
        let d = $denom;
        let n = $num;

        match $crate::rational::Rational::new(n, d) {
            Ok(r) => r,
            Err(e) => panic!("Invalid fraction: {}/{}: {}", n, d, e),
        }
    }};
    ($num:expr) => {
        $crate::rational::Rational::from(($num) as $crate::rational::BaseInt)
    };
}
