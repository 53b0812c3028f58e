//! Coordinate pairs used for grid indexing and sizing.
//!
//! [`Coordinates`] is a plain `(x, y)` pair with strictly component-wise
//! arithmetic and ordering predicates; there is no cross-component coupling
//! anywhere. Two aliases are used throughout the crate: [`Indices`] for a
//! position and [`Extents`] for a width/height pair. They share the same
//! representation but carry distinct meaning; extent components are never
//! negative in valid use.
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::{IVec2, Vec2};

/// A two-component coordinate pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates<T> {
    pub x: T,
    pub y: T,
}

/// Grid access index pair.
pub type Indices = Coordinates<i32>;

/// Grid sizing pair.
pub type Extents = Coordinates<i32>;

impl<T> Coordinates<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Apply `f` to both components.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Coordinates<U> {
        Coordinates::new(f(self.x), f(self.y))
    }
}

impl<T: Copy + PartialOrd> Coordinates<T> {
    /// Both components strictly greater than `other`'s.
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// Both components greater than or equal to `other`'s.
    pub fn all_ge(self, other: Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// Both components strictly less than `other`'s.
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    /// Both components less than or equal to `other`'s.
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            if self.x >= other.x { self.x } else { other.x },
            if self.y >= other.y { self.y } else { other.y },
        )
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            if self.x <= other.x { self.x } else { other.x },
            if self.y <= other.y { self.y } else { other.y },
        )
    }
}

impl<T: Copy + Mul<Output = T>> Coordinates<T> {
    /// Product of the components; the cell count when this pair is an extent.
    pub fn area(self) -> T {
        self.x * self.y
    }
}

impl<T: Copy + Default + PartialEq> Coordinates<T> {
    pub fn is_zero(self) -> bool {
        self.x == T::default() && self.y == T::default()
    }
}

impl Coordinates<i32> {
    pub const ZERO: Self = Self::new(0, 0);

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn as_f32(self) -> Coordinates<f32> {
        Coordinates::new(self.x as f32, self.y as f32)
    }
}

impl Coordinates<f32> {
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Truncate both components to integer indices.
    pub fn to_indices(self) -> Indices {
        Indices::new(self.x as i32, self.y as i32)
    }
}

impl<T: Add<Output = T>> Add for Coordinates<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Coordinates<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Coordinates<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: AddAssign> AddAssign for Coordinates<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Coordinates<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Coordinates<T> {
    type Output = Self;

    fn mul(self, scale: T) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Coordinates<T> {
    type Output = Self;

    fn div(self, scale: T) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }
}

impl<T: fmt::Display> fmt::Display for Coordinates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<IVec2> for Coordinates<i32> {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coordinates<i32>> for IVec2 {
    fn from(c: Coordinates<i32>) -> Self {
        IVec2::new(c.x, c.y)
    }
}

impl From<Vec2> for Coordinates<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coordinates<f32>> for Vec2 {
    fn from(c: Coordinates<f32>) -> Self {
        Vec2::new(c.x, c.y)
    }
}

impl<T> From<(T, T)> for Coordinates<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Indices::new(3, -2);
        let b = Indices::new(1, 5);
        assert_eq!(a + b, Indices::new(4, 3));
        assert_eq!(a - b, Indices::new(2, -7));
        assert_eq!(-a, Indices::new(-3, 2));
        assert_eq!(a * 2, Indices::new(6, -4));
        assert_eq!(Indices::new(7, -7) / 2, Indices::new(3, -3));
    }

    #[test]
    fn compound_assignment() {
        let mut a = Indices::new(1, 1);
        a += Indices::new(2, 3);
        assert_eq!(a, Indices::new(3, 4));
        a -= Indices::new(1, 1);
        assert_eq!(a, Indices::new(2, 3));
    }

    #[test]
    fn ordering_predicates_require_both_components() {
        let a = Indices::new(1, 5);
        let b = Indices::new(2, 2);
        assert!(!a.all_lt(b));
        assert!(!a.all_gt(b));
        assert!(Indices::new(1, 1).all_lt(Indices::new(2, 2)));
        assert!(Indices::new(2, 2).all_ge(Indices::new(2, 1)));
        assert!(Indices::new(2, 2).all_le(Indices::new(2, 2)));
    }

    #[test]
    fn lexicographic_order_compares_x_then_y() {
        assert!(Indices::new(1, 9) < Indices::new(2, 0));
        assert!(Indices::new(1, 1) < Indices::new(1, 2));
    }

    #[test]
    fn area_abs_and_zero() {
        assert_eq!(Extents::new(4, 5).area(), 20);
        assert_eq!(Indices::new(-3, 4).abs(), Indices::new(3, 4));
        assert!(Indices::ZERO.is_zero());
        assert!(!Indices::new(0, 1).is_zero());
    }

    #[test]
    fn min_max_are_component_wise() {
        let a = Indices::new(1, 9);
        let b = Indices::new(4, 2);
        assert_eq!(a.max(b), Indices::new(4, 9));
        assert_eq!(a.min(b), Indices::new(1, 2));
    }

    #[test]
    fn glam_round_trip() {
        let c = Indices::new(-2, 7);
        let v: IVec2 = c.into();
        assert_eq!(Indices::from(v), c);

        let f = Coordinates::new(1.5f32, -0.5);
        let v: Vec2 = f.into();
        assert_eq!(Coordinates::from(v), f);
        assert_eq!(f.to_indices(), Indices::new(1, 0));
    }
}
