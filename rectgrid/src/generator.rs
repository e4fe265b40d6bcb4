use crate::{error::GridError, grid::Grid, names::NameGenerator, point::Point, rectangle::Rectangle};
use log::debug;
use rand::Rng;

/// Populates a grid with randomly placed rectangles.
pub struct RectGenerator<F, R> {
    names: NameGenerator<F>,
    rng: R,
}

impl<F, R> RectGenerator<F, R>
where
    F: FnMut() -> char,
    R: Rng,
{
    pub fn new(names: NameGenerator<F>, rng: R) -> Self {
        Self { names, rng }
    }

    /// Adds one random rectangle to `grid` and returns its name.
    ///
    /// Names are drawn until one is found that is not taken yet. This never
    /// returns when every possible name is already used in the grid.
    pub fn add_random_rectangle(&mut self, grid: &mut Grid) -> Result<String, GridError> {
        let name = loop {
            let name = self.names.generate();
            if !grid.contains_name(&name) {
                break name;
            }
            debug!("Generated name {name} is taken, drawing again");
        };

        let top_right = Point::new(
            self.rng.gen_range(0..=grid.width()),
            self.rng.gen_range(0..=grid.height()),
        );
        let bottom_left = Point::new(
            self.rng.gen_range(0..=top_right.x),
            self.rng.gen_range(0..=top_right.y),
        );

        grid.add_rectangle(Rectangle::new(bottom_left, top_right, name.clone()))?;
        Ok(name)
    }

    /// Adds `count` random rectangles and returns their names.
    pub fn populate(&mut self, grid: &mut Grid, count: usize) -> Result<Vec<String>, GridError> {
        (0..count)
            .map(|_| self.add_random_rectangle(grid))
            .collect()
    }
}
