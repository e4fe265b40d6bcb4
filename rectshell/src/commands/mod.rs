pub mod bulk;
pub mod query;
pub mod rectangle;

use crate::helpers::{Console, InputClosed};
use anyhow::Result;
use log::debug;
use rand::rngs::StdRng;
use rectgrid::Grid;
use std::io::{BufRead, Write};

const MENU: &str = "\
Rectangle Program Menu Options
------------------------------
1. Print rectangles
2. Add rectangle
3. Remove rectangle
4. Find rectangle intersection
5. Find rectangle union
6. Sort rectangles by name
7. Check if point in rectangle
8. Add random rectangles
9. Load rectangles from file
10. Quit";

/// Everything a menu command works on.
pub struct Session<R, W> {
    pub grid: Grid,
    pub console: Console<R, W>,
    pub rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Print,
    Add,
    Remove,
    Intersection,
    Union,
    Sort,
    Contains,
    Random,
    Load,
    Quit,
}

impl Command {
    const ALL: [Command; 10] = [
        Command::Print,
        Command::Add,
        Command::Remove,
        Command::Intersection,
        Command::Union,
        Command::Sort,
        Command::Contains,
        Command::Random,
        Command::Load,
        Command::Quit,
    ];

    /// Maps a 1-based menu option to its command.
    pub fn from_option(option: i64) -> Option<Self> {
        let idx = usize::try_from(option).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(grid: Grid, console: Console<R, W>, rng: StdRng) -> Self {
        Self { grid, console, rng }
    }

    /// Shows the menu and runs commands until the user quits or the input
    /// is closed.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(err) if err.is::<InputClosed>() => {
                debug!("Input closed, leaving menu");
                Ok(())
            }
            res => res,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Running command {command:?}");
        match command {
            Command::Print => rectangle::print(self)?,
            Command::Add => rectangle::add(self)?,
            Command::Remove => rectangle::remove(self)?,
            Command::Intersection => query::intersection(self)?,
            Command::Union => query::union(self)?,
            Command::Sort => rectangle::sort(self)?,
            Command::Contains => query::contains(self)?,
            Command::Random => bulk::random(self)?,
            Command::Load => bulk::load(self)?,
            Command::Quit => {
                self.console.say("Goodbye.")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn menu_loop(&mut self) -> Result<()> {
        let max = Command::ALL.len();

        self.console.clear()?;
        loop {
            self.console.say(MENU)?;
            let input = self.console.prompt("Enter an option: ")?;
            self.console.say("")?;

            match input.parse::<i64>() {
                Err(_) => self.console.say(format!(
                    "Illegal input: must be a number between 1 and {max}."
                ))?,
                Ok(option) => match Command::from_option(option) {
                    None => self.console.say(format!(
                        "Illegal option '{option}': Must be between 1 and {max}."
                    ))?,
                    Some(command) => {
                        if self.execute(command)? == Flow::Quit {
                            return Ok(());
                        }
                    }
                },
            }

            self.console.pause()?;
            self.console.clear()?;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::helpers::tests::{console, written};
    use rand::SeedableRng;
    use rectgrid::{Point, Rectangle};
    use std::io::Cursor;

    pub(crate) type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    pub(crate) fn session(input: &str) -> TestSession {
        Session::new(
            Grid::new(600, 400).unwrap(),
            console(input),
            StdRng::seed_from_u64(0),
        )
    }

    pub(crate) fn with_rect(
        mut s: TestSession,
        bl: (i64, i64),
        tr: (i64, i64),
        name: &str,
    ) -> TestSession {
        s.grid
            .add_rectangle(Rectangle::new(Point::from(bl), Point::from(tr), name))
            .unwrap();
        s
    }

    pub(crate) fn output(s: &TestSession) -> String {
        written(&s.console)
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Command::from_option(1), Some(Command::Print));
        assert_eq!(Command::from_option(6), Some(Command::Sort));
        assert_eq!(Command::from_option(10), Some(Command::Quit));
        assert_eq!(Command::from_option(0), None);
        assert_eq!(Command::from_option(11), None);
        assert_eq!(Command::from_option(-3), None);
    }

    #[test]
    fn test_menu_quit() {
        let mut s = session("10\n");
        s.run().unwrap();
        let out = output(&s);
        assert!(out.contains("Rectangle Program Menu Options"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_menu_rejects_bad_options() {
        let mut s = session("nope\n42\n10\n");
        s.run().unwrap();
        let out = output(&s);
        assert!(out.contains("Illegal input: must be a number between 1 and 10."));
        assert!(out.contains("Illegal option '42': Must be between 1 and 10."));
        assert_eq!(out.matches("Enter an option: ").count(), 3);
    }

    #[test]
    fn test_menu_ends_on_closed_input() {
        let mut s = session("1\n");
        s.run().unwrap();
        assert!(output(&s).contains("Rectangles currently present in grid"));
    }

    #[test]
    fn test_menu_session() {
        let input = "\
2
0
0
10
10
abcd
2
5
5
15
15
efgh
4
abcd
efgh
10
";
        let mut s = session(input);
        s.run().unwrap();

        assert_eq!(s.grid.len(), 2);
        assert!(output(&s).contains("Found intersection: \"<abcd / efgh>\" - (5, 5) - (10, 10)"));
    }
}
