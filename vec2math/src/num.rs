use crate::math::MathProvider;
use num_traits::{AsPrimitive, Float, Num, NumCast};
use std::fmt::{Debug, Display};

/// Component type of a [`Vec2`](crate::Vec2).
///
/// Implemented for every primitive integer and float. `Real` is the float type
/// geometric queries are computed in: the element itself for floats, `f64` for integers.
pub trait Element:
    Num + NumCast + AsPrimitive<f64> + PartialOrd + Debug + Display + Send + Sync
{
    type Real: Real;

    fn to_real(self) -> Self::Real;

    /// Truncates toward zero and saturates for integer elements.
    fn from_real(r: Self::Real) -> Self;

    /// Same conversion as `from_real`, from the `f64` that scaling is computed in.
    fn from_wide(v: f64) -> Self;
}

/// Float type that the transcendental functions are evaluated in.
pub trait Real: Float + AsPrimitive<f64> + Debug + Display + Send + Sync {
    fn widen(v: f32) -> Self;

    fn sqrt_with<M: MathProvider>(self) -> Self;
    fn sin_with<M: MathProvider>(self) -> Self;
    fn cos_with<M: MathProvider>(self) -> Self;
    fn acos_with<M: MathProvider>(self) -> Self;
    /// `atan2(self, other)`, same argument order as [`f32::atan2`].
    fn atan2_with<M: MathProvider>(self, other: Self) -> Self;
}

/// Numeric operand used to scale a vector, integer or float.
///
/// Scaling is computed in `f64` and lowered back to the element with `as`
/// semantics, so an integer vector scaled by `0.5` or divided by `2` truncates.
/// `f32` results are the same as computing in `f32` directly.
pub trait Scalar: Num + AsPrimitive<f64> + PartialOrd + Debug {
    #[inline]
    fn wide(self) -> f64 {
        self.as_()
    }
}

impl<S> Scalar for S where S: Num + AsPrimitive<f64> + PartialOrd + Debug {}

impl Real for f32 {
    #[inline]
    fn widen(v: f32) -> Self {
        v
    }

    #[inline]
    fn sqrt_with<M: MathProvider>(self) -> Self {
        M::sqrtf(self)
    }

    #[inline]
    fn sin_with<M: MathProvider>(self) -> Self {
        M::sinf(self)
    }

    #[inline]
    fn cos_with<M: MathProvider>(self) -> Self {
        M::cosf(self)
    }

    #[inline]
    fn acos_with<M: MathProvider>(self) -> Self {
        M::acosf(self)
    }

    #[inline]
    fn atan2_with<M: MathProvider>(self, other: Self) -> Self {
        M::atan2f(self, other)
    }
}

impl Real for f64 {
    #[inline]
    fn widen(v: f32) -> Self {
        v as f64
    }

    #[inline]
    fn sqrt_with<M: MathProvider>(self) -> Self {
        M::sqrt(self)
    }

    #[inline]
    fn sin_with<M: MathProvider>(self) -> Self {
        M::sin(self)
    }

    #[inline]
    fn cos_with<M: MathProvider>(self) -> Self {
        M::cos(self)
    }

    #[inline]
    fn acos_with<M: MathProvider>(self) -> Self {
        M::acos(self)
    }

    #[inline]
    fn atan2_with<M: MathProvider>(self, other: Self) -> Self {
        M::atan2(self, other)
    }
}

macro_rules! impl_element {
    ($real:ty => $($t:ty),*) => {
        $(
            impl Element for $t {
                type Real = $real;

                #[inline]
                fn to_real(self) -> $real {
                    self as $real
                }

                #[inline]
                fn from_real(r: $real) -> Self {
                    r as $t
                }

                #[inline]
                fn from_wide(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_element!(f32 => f32);
impl_element!(f64 => f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
