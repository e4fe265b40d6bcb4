use crate::{point::Point, shape::Shape};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle spanned by its bottom left and top right
/// corners, both inclusive.
///
/// A rectangle is a plain value. Nothing is validated on construction, so a
/// rectangle with swapped corners can exist; it is only refused when being
/// added to a [`Grid`](crate::Grid). Measuring such a rectangle yields
/// negative values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    bottom_left: Point,
    top_right: Point,
    name: String,
}

impl Rectangle {
    pub fn new<N: Into<String>>(bottom_left: Point, top_right: Point, name: N) -> Self {
        Self {
            bottom_left,
            top_right,
            name: name.into(),
        }
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn top_right(&self) -> Point {
        self.top_right
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reports whether `point` lies inside the rectangle or on its border.
    pub fn contains_point(&self, point: Point) -> bool {
        (self.bottom_left.x..=self.top_right.x).contains(&point.x)
            && (self.bottom_left.y..=self.top_right.y).contains(&point.y)
    }

    /// Returns the bounding box of both rectangles.
    ///
    /// The result is named `<self + other>`. Disjoint rectangles still have
    /// a union, which then also covers the space between them.
    pub fn union_rectangle(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            bottom_left: Point::new(
                self.bottom_left.x.min(other.bottom_left.x),
                self.bottom_left.y.min(other.bottom_left.y),
            ),
            top_right: Point::new(
                self.top_right.x.max(other.top_right.x),
                self.top_right.y.max(other.top_right.y),
            ),
            name: format!("<{} + {}>", self.name, other.name),
        }
    }

    /// Returns the area shared by both rectangles, named `<self / other>`.
    ///
    /// Rectangles that only touch along an edge or at a corner intersect in
    /// a rectangle of zero width or height.
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let x5 = self.bottom_left.x.max(other.bottom_left.x);
        let x6 = self.top_right.x.min(other.top_right.x);
        if x5 > x6 {
            return None;
        }

        let y5 = self.bottom_left.y.max(other.bottom_left.y);
        let y6 = self.top_right.y.min(other.top_right.y);
        if y5 > y6 {
            return None;
        }

        Some(Rectangle {
            bottom_left: Point::new(x5, y5),
            top_right: Point::new(x6, y6),
            name: format!("<{} / {}>", self.name, other.name),
        })
    }

    fn width(&self) -> i64 {
        self.top_right.x.saturating_sub(self.bottom_left.x)
    }

    fn height(&self) -> i64 {
        self.top_right.y.saturating_sub(self.bottom_left.y)
    }
}

/// Measurements saturate at the bounds of `i64`. They are exact for every
/// rectangle a [`Grid`](crate::Grid) accepts.
impl Shape for Rectangle {
    fn perimeter(&self) -> i64 {
        self.width().saturating_add(self.height()).saturating_mul(2)
    }

    fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" - {} - {}",
            self.name, self.bottom_left, self.top_right
        )
    }
}
