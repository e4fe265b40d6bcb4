use super::Session;
use anyhow::Result;
use rectgrid::{Point, Rectangle};
use std::io::{BufRead, Write};

pub fn intersection<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let first = prompt_existing(s, "Enter the name of the first rectangle: ")?;
    let second = prompt_existing(s, "Enter the name of the second rectangle: ")?;

    match first.intersection(&second) {
        Some(rect) => s.console.say(format!("Found intersection: {rect}")),
        None => s.console.say("No intersection found!"),
    }
}

pub fn union<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let first = prompt_existing(s, "Enter the name of the first rectangle: ")?;
    let second = prompt_existing(s, "Enter the name of the second rectangle: ")?;

    let rect = first.union_rectangle(&second);
    s.console.say(format!("Found union: {rect}"))
}

pub fn contains<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let rect = prompt_existing(s, "Enter the name of the rectangle to check: ")?;
    let point = Point::new(
        s.console
            .prompt_int("Enter the X coordinate of the point to check: ")?,
        s.console
            .prompt_int("Enter the Y coordinate of the point to check: ")?,
    );

    if rect.contains_point(point) {
        s.console.say("Point was within rectangle!")
    } else {
        s.console.say("Point was not within rectangle!")
    }
}

/// Prompts for a name until it matches a rectangle in the grid.
fn prompt_existing<R: BufRead, W: Write>(s: &mut Session<R, W>, msg: &str) -> Result<Rectangle> {
    loop {
        let name = s.console.prompt(msg)?;
        if let Some(rect) = s.grid.find_rectangle_by_name(&name) {
            return Ok(rect.clone());
        }

        s.console
            .say(format!("No rectangle with name \"{name}\" exists in the grid."))?;
        s.console.pause()?;
        s.console.clear()?;
    }
}
