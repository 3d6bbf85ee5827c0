mod angle;
pub mod math;
mod num;
mod v2;

pub use angle::*;
pub use math::{ActiveMath, MathProvider, StdMath, SOFTWARE_MATH_ENABLED};
#[cfg(feature = "libm")]
pub use math::LibmMath;
pub use num::*;
pub use v2::*;

/// Componentwise min and max of a set of points.
pub fn minmax<T: Element>(x: &[Vec2<T>]) -> Option<(Vec2<T>, Vec2<T>)> {
    let mut min: Vec2<T> = *x.first()?;
    let mut max: Vec2<T> = min;

    for &v in &x[1..] {
        if v.x < min.x {
            min.x = v.x;
        }
        if v.y < min.y {
            min.y = v.y;
        }
        if v.x > max.x {
            max.x = v.x;
        }
        if v.y > max.y {
            max.y = v.y;
        }
    }

    Some((min, max))
}
