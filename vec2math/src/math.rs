//! Transcendental functions behind a swappable provider.
//!
//! Every geometric query goes through [`ActiveMath`], which is [`StdMath`] by default
//! and [`LibmMath`] when the `libm` feature is enabled. Both produce the same results
//! within float tolerance; `libm` is pure Rust and usable where std intrinsics are not.

use crate::num::Real;

pub trait MathProvider {
    fn sqrtf(x: f32) -> f32;
    fn sinf(x: f32) -> f32;
    fn cosf(x: f32) -> f32;
    fn acosf(x: f32) -> f32;
    fn atan2f(y: f32, x: f32) -> f32;

    fn sqrt(x: f64) -> f64;
    fn sin(x: f64) -> f64;
    fn cos(x: f64) -> f64;
    fn acos(x: f64) -> f64;
    fn atan2(y: f64, x: f64) -> f64;
}

/// Runtime math from the standard library.
#[derive(Debug, Copy, Clone, Default)]
pub struct StdMath;

impl MathProvider for StdMath {
    #[inline]
    fn sqrtf(x: f32) -> f32 {
        x.sqrt()
    }

    #[inline]
    fn sinf(x: f32) -> f32 {
        x.sin()
    }

    #[inline]
    fn cosf(x: f32) -> f32 {
        x.cos()
    }

    #[inline]
    fn acosf(x: f32) -> f32 {
        x.acos()
    }

    #[inline]
    fn atan2f(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[inline]
    fn sqrt(x: f64) -> f64 {
        x.sqrt()
    }

    #[inline]
    fn sin(x: f64) -> f64 {
        x.sin()
    }

    #[inline]
    fn cos(x: f64) -> f64 {
        x.cos()
    }

    #[inline]
    fn acos(x: f64) -> f64 {
        x.acos()
    }

    #[inline]
    fn atan2(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
}

/// Software math from the `libm` crate.
#[cfg(feature = "libm")]
#[derive(Debug, Copy, Clone, Default)]
pub struct LibmMath;

#[cfg(feature = "libm")]
impl MathProvider for LibmMath {
    #[inline]
    fn sqrtf(x: f32) -> f32 {
        libm::sqrtf(x)
    }

    #[inline]
    fn sinf(x: f32) -> f32 {
        libm::sinf(x)
    }

    #[inline]
    fn cosf(x: f32) -> f32 {
        libm::cosf(x)
    }

    #[inline]
    fn acosf(x: f32) -> f32 {
        libm::acosf(x)
    }

    #[inline]
    fn atan2f(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }

    #[inline]
    fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }

    #[inline]
    fn sin(x: f64) -> f64 {
        libm::sin(x)
    }

    #[inline]
    fn cos(x: f64) -> f64 {
        libm::cos(x)
    }

    #[inline]
    fn acos(x: f64) -> f64 {
        libm::acos(x)
    }

    #[inline]
    fn atan2(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
}

#[cfg(not(feature = "libm"))]
pub type ActiveMath = StdMath;

#[cfg(feature = "libm")]
pub type ActiveMath = LibmMath;

/// True when [`ActiveMath`] is the software provider.
pub const SOFTWARE_MATH_ENABLED: bool = cfg!(feature = "libm");

#[inline]
pub(crate) fn sqrt<R: Real>(x: R) -> R {
    x.sqrt_with::<ActiveMath>()
}

#[inline]
pub(crate) fn sin<R: Real>(x: R) -> R {
    x.sin_with::<ActiveMath>()
}

#[inline]
pub(crate) fn cos<R: Real>(x: R) -> R {
    x.cos_with::<ActiveMath>()
}

#[inline]
pub(crate) fn acos<R: Real>(x: R) -> R {
    x.acos_with::<ActiveMath>()
}

#[inline]
pub(crate) fn atan2<R: Real>(a: R, b: R) -> R {
    a.atan2_with::<ActiveMath>(b)
}
