use crate::math;
use crate::num::{Element, Scalar};
use num_traits::{AsPrimitive, Float, NumCast, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Two component vector over any primitive number.
///
/// Float elements are the intended use. Integer elements work too, every
/// operation that goes through a float (scaling, normalization, trig) truncates
/// the result toward zero.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec2i = Vec2<i32>;

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vec2 { x, y }
}

#[inline]
fn scale<T: Element, S: Scalar>(v: T, s: S) -> T {
    T::from_wide(v.wide() * s.wide())
}

#[inline]
fn shrink<T: Element, S: Scalar>(v: T, s: S) -> T {
    T::from_wide(v.wide() / s.wide())
}

impl<T> Vec2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Explicit conversion into any type buildable from the two components,
    /// e.g. another library's vector type.
    #[inline]
    pub fn convert<K: From<(T, T)>>(self) -> K {
        K::from((self.x, self.y))
    }
}

impl<T: Element> Vec2<T> {
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }

    /// Unit vector `(cos theta, sin theta)`.
    #[inline]
    pub fn from_angle(theta: T::Real) -> Self {
        Self {
            x: T::from_real(math::cos(theta)),
            y: T::from_real(math::sin(theta)),
        }
    }

    /// Computed in the element type, integer vectors can overflow.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Computed in the element type, integer vectors can overflow. See [`Vec2::mag`].
    #[inline]
    pub fn mag_sq(self) -> T {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    fn dot_real(self, rhs: Self) -> T::Real {
        self.x.to_real() * rhs.x.to_real() + self.y.to_real() * rhs.y.to_real()
    }

    #[inline]
    pub fn mag(self) -> T::Real {
        math::sqrt(self.dot_real(self))
    }

    /// `atan2(x, y)`: the angle is measured from the y axis, positive towards x.
    /// Returns zero for the zero vector.
    #[inline]
    pub fn heading(self) -> T::Real {
        math::atan2(self.x.to_real(), self.y.to_real())
    }

    /// Unsigned angle between self and other in range [0; pi].
    /// NaN if either vector has zero magnitude.
    #[inline]
    pub fn angle_between(self, other: Self) -> T::Real {
        math::acos(self.dot_real(other) / (self.mag() * other.mag()))
    }

    /// Computed in the element type, like `mag_sq`.
    #[inline]
    pub fn distance_sq(self, rhs: Self) -> T {
        (self - rhs).mag_sq()
    }

    /// Unlike `distance_sq`, never overflows and works for unsigned elements in any order.
    #[inline]
    pub fn distance(self, rhs: Self) -> T::Real {
        let dx = self.x.to_real() - rhs.x.to_real();
        let dy = self.y.to_real() - rhs.y.to_real();
        math::sqrt(dx * dx + dy * dy)
    }

    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: T::Real) -> bool {
        (self.x.to_real() - other.x.to_real()).abs() <= epsilon
            && (self.y.to_real() - other.y.to_real()).abs() <= epsilon
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let m = self.mag();
        if m > T::Real::zero() {
            let mut v = self;
            v.divide(m);
            Some(v)
        } else {
            None
        }
    }

    #[inline]
    pub fn add_vec(&mut self, v: Self) -> &mut Self {
        self.x = self.x + v.x;
        self.y = self.y + v.y;
        self
    }

    #[inline]
    pub fn sub_vec(&mut self, v: Self) -> &mut Self {
        self.x = self.x - v.x;
        self.y = self.y - v.y;
        self
    }

    #[inline]
    pub fn mult<S: Scalar>(&mut self, scalar: S) -> &mut Self {
        self.x = scale(self.x, scalar);
        self.y = scale(self.y, scalar);
        self
    }

    /// Divides both components by `scalar`. Dividing by zero leaves the vector untouched.
    #[inline]
    pub fn divide<S: Scalar>(&mut self, scalar: S) -> &mut Self {
        if scalar == S::zero() {
            log::trace!("Vec2::divide by zero skipped on {:?}", self);
            return self;
        }
        self.x = shrink(self.x, scalar);
        self.y = shrink(self.y, scalar);
        self
    }

    /// Scales to unit length. The zero vector is left as is.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.mag();
        if m == T::Real::zero() {
            log::trace!("Vec2::normalize skipped on zero vector");
            return self;
        }
        self.divide(m)
    }

    /// Caps the magnitude at `amount` without changing the direction.
    #[inline]
    pub fn limit(&mut self, amount: T::Real) -> &mut Self {
        let m = self.mag();
        if m == T::Real::zero() {
            log::trace!("Vec2::limit skipped on zero vector");
            return self;
        }
        let capped = if m < amount { m } else { amount };
        self.mult(capped / m)
    }

    /// Sets self to the interpolation between `vmin` and `vmax`.
    /// `t <= 0` gives exactly `vmin`, `t >= 1` gives exactly `vmax`.
    pub fn lerp<S: Scalar>(&mut self, vmin: Self, vmax: Self, t: S) -> &mut Self {
        if t > S::zero() && t < S::one() {
            let t = t.wide();
            let (lx, ly) = (vmin.x.wide(), vmin.y.wide());
            self.x = T::from_wide(lx + t * (vmax.x.wide() - lx));
            self.y = T::from_wide(ly + t * (vmax.y.wide() - ly));
        } else if t <= S::zero() {
            *self = vmin;
        } else {
            *self = vmax;
        }
        self
    }

    /// Lossy element conversion with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Vec2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vec2 {
            x: AsPrimitive::<U>::as_(self.x),
            y: AsPrimitive::<U>::as_(self.y),
        }
    }

    /// Element conversion that fails if a component is out of range or NaN.
    #[inline]
    pub fn try_cast<U: NumCast>(self) -> Option<Vec2<U>> {
        Some(Vec2 {
            x: U::from(self.x)?,
            y: U::from(self.y)?,
        })
    }
}

impl<T: Display> Display for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}

impl<T: Element> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Element> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_vec(rhs);
    }
}

impl<T: Element> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Element> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_vec(rhs);
    }
}

impl<T: Element, S: Scalar> Mul<S> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        Self {
            x: scale(self.x, rhs),
            y: scale(self.y, rhs),
        }
    }
}

impl<T: Element, S: Scalar> MulAssign<S> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.mult(rhs);
    }
}

/// Unguarded, see [`Vec2::divide`] for the zero-checked version.
impl<T: Element, S: Scalar> Div<S> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: S) -> Self::Output {
        Self {
            x: shrink(self.x, rhs),
            y: shrink(self.y, rhs),
        }
    }
}

impl<T: Element, S: Scalar> DivAssign<S> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs
    }
}

impl<T: Element + Neg<Output = T>> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Element> std::iter::Sum for Vec2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut z = Vec2::zero();
        for x in iter {
            z += x;
        }
        z
    }
}

impl<'a, T: Element> std::iter::Sum<&'a Vec2<T>> for Vec2<T> {
    fn sum<I: Iterator<Item = &'a Vec2<T>>>(iter: I) -> Self {
        let mut z = Vec2::zero();
        for &x in iter {
            z += x;
        }
        z
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from(v: (T, T)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}
