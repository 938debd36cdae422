//! Axis-aligned rectangle.

use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vec2;

/// An axis-aligned rectangle anchored at its lower-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Scalar> Rect<T> {
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> T {
        self.width * self.height
    }

    pub fn perimeter(&self) -> T {
        T::TWO * (self.width + self.height)
    }

    pub fn center(&self) -> Vec2<T> {
        Vec2::new(
            self.x + self.width * T::HALF,
            self.y + self.height * T::HALF,
        )
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec2<T>) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// True if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.x + other.width <= self.x + self.width
            && other.y >= self.y
            && other.y + other.height <= self.y + self.height
    }

    /// True if the two rectangles share any point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }
}
