//! A bounded grid of uniquely named, axis-aligned integer rectangles.
//!
//! ```
//! use rectgrid::{Grid, Point, Rectangle};
//!
//! let mut grid = Grid::new(600, 400).unwrap();
//! grid.add_rectangle(Rectangle::new(Point::new(0, 0), Point::new(10, 10), "abcd")).unwrap();
//! grid.add_rectangle(Rectangle::new(Point::new(5, 5), Point::new(15, 15), "efgh")).unwrap();
//!
//! let a = grid.find_rectangle_by_name("abcd").unwrap();
//! let b = grid.find_rectangle_by_name("efgh").unwrap();
//! assert_eq!(a.intersection(b).unwrap().to_string(), "\"<abcd / efgh>\" - (5, 5) - (10, 10)");
//! assert_eq!(a.union_rectangle(b).to_string(), "\"<abcd + efgh>\" - (0, 0) - (15, 15)");
//! ```

pub mod error;
mod generator;
mod grid;
pub mod loader;
mod names;
mod point;
mod rectangle;
mod shape;

pub use error::{FormatError, GridError, LoadError, LoadErrorKind, NameError};
pub use generator::RectGenerator;
pub use grid::{Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use loader::LoadReport;
pub use names::{lowercase_names, validate_name, NameGenerator, NAME_LEN};
pub use point::Point;
pub use rectangle::Rectangle;
pub use shape::Shape;
