use core::iter::Sum;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::math::{Fast, Math};
use crate::matrix::{Elements, Matrix};

/// A 2D vector with `f32` components.
///
/// Index 0 is `x` and index 1 is `y`, both through [`Index`] and through the
/// [`Matrix`] adapter, where the vector is a single column of two rows.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    #[cfg_attr(test, proptest(strategy = "-1.0e3f32..1.0e3"))]
    pub x: f32,
    #[cfg_attr(test, proptest(strategy = "-1.0e3f32..1.0e3"))]
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);
    pub const MIN: Self = Self::new(-f32::MAX, -f32::MAX);
    pub const MAX: Self = Self::new(f32::MAX, f32::MAX);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Takes the first column of `source`: `(get(0, 0), get(0, 1))`.
    pub fn from_elements<E>(source: &E) -> Self
    where
        E: Elements + ?Sized,
    {
        Self::new(source.get(0, 0), source.get(0, 1))
    }

    /// Exact comparison against zero, no tolerance.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn length_sqr(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length computed with the [`Fast`] square root.
    pub fn length(self) -> f32 {
        self.length_with::<Fast>()
    }

    pub fn length_with<M: Math>(self) -> f32 {
        M::sqrtf(self.length_sqr())
    }

    pub fn scale(&mut self, f: f32) {
        self.x *= f;
        self.y *= f;
    }

    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    pub fn inverted(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Scales the vector to unit length using the [`Fast`] policy.
    ///
    /// Zero vectors and vectors whose squared length is exactly 1 are left
    /// untouched, so a normalized vector is not guaranteed to have unit
    /// length.
    pub fn normalize(&mut self) {
        self.normalize_with::<Fast>();
    }

    pub fn normalize_with<M: Math>(&mut self) {
        let sl = self.length_sqr();
        if sl == 0.0 || sl == 1.0 {
            return;
        }
        self.scale(M::inv_sqrtf(sl));
    }

    /// Returns a copy with [`normalize`](Self::normalize) applied.
    pub fn normalized(self) -> Self {
        self.normalized_with::<Fast>()
    }

    pub fn normalized_with<M: Math>(mut self) -> Self {
        self.normalize_with::<M>();
        self
    }
}

pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x + b.x, a.y + b.y)
}

pub fn sub(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x - b.x, a.y - b.y)
}

/// Componentwise product.
pub fn mul(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.x * b.x, a.y * b.y)
}

pub fn dot(a: Vector2, b: Vector2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Vector-valued "cross product", kept for compatibility with existing data.
///
/// With `c = a.x * b.y - a.y * b.x` this returns `(-c, c)`. It has no
/// geometric meaning in 2D; use [`perp_dot`] for the scalar cross product.
pub fn cross(a: Vector2, b: Vector2) -> Vector2 {
    Vector2::new(a.y * b.x - a.x * b.y, a.x * b.y - a.y * b.x)
}

/// Scalar 2D cross product. Positive when `b` is counter-clockwise from `a`.
pub fn perp_dot(a: Vector2, b: Vector2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Angle in radians between two unit vectors, using the [`Fast`] arccosine.
///
/// The inputs are not normalized. When `dot(a, b)` falls outside `[-1, 1]`
/// the result is meaningless and may be NaN.
pub fn angle(a: Vector2, b: Vector2) -> f32 {
    angle_with::<Fast>(a, b)
}

pub fn angle_with<M: Math>(a: Vector2, b: Vector2) -> f32 {
    M::acosf(dot(a, b))
}

/// Componentwise minimum. A component of `b` replaces the one of `a` only if
/// it compares strictly less.
pub fn min(a: Vector2, b: Vector2) -> Vector2 {
    let mut min = a;
    if b.x < min.x {
        min.x = b.x;
    }
    if b.y < min.y {
        min.y = b.y;
    }
    min
}

/// Componentwise maximum, keeping `a` unless `b` compares strictly greater.
pub fn max(a: Vector2, b: Vector2) -> Vector2 {
    let mut max = a;
    if b.x > max.x {
        max.x = b.x;
    }
    if b.y > max.y {
        max.y = b.y;
    }
    max
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        sub(self, rhs)
    }
}

impl Mul for Vector2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        mul(self, rhs)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        self.scale(rhs);
        self
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverted()
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale(rhs);
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, v| {
            acc += v;
            acc
        })
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: Vector2 has 2 components but the index is {}", index),
        }
    }
}

impl IndexMut<usize> for Vector2 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: Vector2 has 2 components but the index is {}", index),
        }
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl num_traits::Zero for Vector2 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Vector2::is_zero(*self)
    }
}

impl Elements for Vector2 {
    /// # Panics
    ///
    /// Panics if `row` is not 0 or 1. `col` is ignored.
    fn get(&self, _col: usize, row: usize) -> f32 {
        self[row]
    }
}

impl Matrix for Vector2 {
    type Slice = [f32; 2];

    fn rows(&self) -> usize {
        2
    }

    fn cols(&self) -> usize {
        1
    }

    fn size(&self) -> usize {
        2
    }

    fn slice(&self) -> [f32; 2] {
        (*self).into()
    }
}

#[cfg(feature = "approx")]
mod approx_eq {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use super::Vector2;

    impl AbsDiffEq for Vector2 {
        type Epsilon = f32;

        fn default_epsilon() -> f32 {
            f32::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
            self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
        }
    }

    impl RelativeEq for Vector2 {
        fn default_max_relative() -> f32 {
            f32::default_max_relative()
        }

        fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
            self.x.relative_eq(&other.x, epsilon, max_relative)
                && self.y.relative_eq(&other.y, epsilon, max_relative)
        }
    }

    impl UlpsEq for Vector2 {
        fn default_max_ulps() -> u32 {
            f32::default_max_ulps()
        }

        fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
            self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
        }
    }
}
