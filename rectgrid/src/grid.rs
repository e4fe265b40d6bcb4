use crate::{error::GridError, point::Point, rectangle::Rectangle};
use log::debug;
use std::collections::{btree_map::Values, BTreeMap};

pub const DEFAULT_WIDTH: i64 = 600;
pub const DEFAULT_HEIGHT: i64 = 400;

/// Largest width or height a grid may have. Perimeter and area of every
/// rectangle inside such a grid fit into an `i64`.
pub const MAX_DIMENSION: i64 = i32::MAX as i64;

/// A bounded area spanning `[0, width] x [0, height]` that holds uniquely
/// named rectangles.
///
/// Every stored rectangle lies completely inside of the grid with its
/// corners in order. Iteration always yields the rectangles sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i64,
    height: i64,
    rects: BTreeMap<String, Rectangle>,
}

impl Grid {
    /// Creates an empty grid. Both dimensions must lie in
    /// `[0, MAX_DIMENSION]`.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::IllegalSize(format!(
                "Grid dimensions must not be negative, got {width}x{height}"
            )));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::IllegalSize(format!(
                "Grid dimensions must not exceed {MAX_DIMENSION}, got {width}x{height}"
            )));
        }

        Ok(Self {
            width,
            height,
            rects: BTreeMap::new(),
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Stores `rect` after running the admission check.
    ///
    /// The grid is left untouched when the rectangle is refused.
    pub fn add_rectangle(&mut self, rect: Rectangle) -> Result<(), GridError> {
        self.validate(&rect)?;
        debug!("Adding rectangle {rect}");
        self.rects.insert(rect.name().to_owned(), rect);
        Ok(())
    }

    /// Removes the rectangle called `name` and reports whether it existed.
    pub fn remove_rectangle_by_name(&mut self, name: &str) -> bool {
        let removed = self.rects.remove(name).is_some();
        if removed {
            debug!("Removed rectangle {name}");
        }
        removed
    }

    pub fn find_rectangle_by_name(&self, name: &str) -> Option<&Rectangle> {
        self.rects.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.rects.contains_key(name)
    }

    pub fn for_each<F: FnMut(&Rectangle)>(&self, visit: F) {
        self.iter().for_each(visit);
    }

    pub fn iter(&self) -> Values<'_, String, Rectangle> {
        self.rects.values()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    fn validate(&self, rect: &Rectangle) -> Result<(), GridError> {
        let name = rect.name();
        let Point { x: blx, y: bly } = rect.bottom_left();
        let Point { x: trx, y: try_ } = rect.top_right();

        if self.contains_name(name) {
            return Err(GridError::NameConflict(name.to_owned()));
        }

        if bly > try_ {
            return Err(GridError::IllegalSize(format!(
                "Rectangle {name} must have a lower left corner with a lower Y coordinate \
                 than its upper right corner"
            )));
        } else if blx > trx {
            return Err(GridError::IllegalSize(format!(
                "Rectangle {name} must have a lower left corner with a lower X coordinate \
                 than its upper right corner"
            )));
        }

        if trx > self.width {
            return Err(GridError::IllegalSize(format!(
                "Rectangle {name} has width exceeding grid width {}",
                self.width
            )));
        } else if try_ > self.height {
            return Err(GridError::IllegalSize(format!(
                "Rectangle {name} has height exceeding grid height {}",
                self.height
            )));
        }

        if blx < 0 || bly < 0 {
            return Err(GridError::IllegalSize(format!(
                "Rectangle {name} must have a lower left corner inside of the grid"
            )));
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Rectangle;
    type IntoIter = Values<'a, String, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
