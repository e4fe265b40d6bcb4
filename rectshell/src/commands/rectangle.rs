use super::Session;
use anyhow::Result;
use rectgrid::{validate_name, GridError, Point, Rectangle};
use std::io::{BufRead, Write};

const RULER: &str = "------------------------------";

pub fn print<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    s.console.say(format!("Rectangles currently present in grid\n{RULER}"))?;
    for rect in &s.grid {
        s.console.say(rect)?;
    }
    s.console.say(RULER)
}

pub fn sort<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    // the grid keeps its rectangles ordered by name at all times
    s.console.say("All rectangles sorted.")?;
    print(s)
}

pub fn add<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    loop {
        let bottom_left = Point::new(
            s.console
                .prompt_int("Enter the X coordinate of the lower left corner of the rectangle: ")?,
            s.console
                .prompt_int("Enter the Y coordinate of the lower left corner of the rectangle: ")?,
        );
        let top_right = Point::new(
            s.console
                .prompt_int("Enter the X coordinate of the upper right corner of the rectangle: ")?,
            s.console
                .prompt_int("Enter the Y coordinate of the upper right corner of the rectangle: ")?,
        );

        let name = loop {
            let name = s.console.prompt("Enter the name of this rectangle: ")?;
            match validate_name(&name) {
                Ok(()) => break name,
                Err(err) => {
                    s.console.say(format!("Illegal name \"{name}\": {err}"))?;
                    s.console.pause()?;
                }
            }
        };

        match s
            .grid
            .add_rectangle(Rectangle::new(bottom_left, top_right, name.clone()))
        {
            Ok(()) => {
                s.console
                    .say(format!("Successfully added rectangle \"{name}\" to grid!"))?;
                s.console.pause()?;
                return print(s);
            }
            Err(err @ GridError::IllegalSize(_)) => {
                s.console.say(format!("Illegal size specified: {err}"))?;
                s.console.pause()?;
            }
            Err(err @ GridError::NameConflict(_)) => {
                s.console.say(format!("Illegal name specified: {err}"))?;
                s.console.pause()?;
            }
        }
    }
}

pub fn remove<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let name = s.console.prompt("Enter the name of this rectangle: ")?;
    if s.grid.remove_rectangle_by_name(&name) {
        s.console.say(format!("Removed rectangle \"{name}\"."))?;
    } else {
        s.console
            .say(format!("No rectangle with name \"{name}\" exists in the grid."))?;
    }
    s.console.pause()?;
    print(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{output, session, with_rect};

    #[test]
    fn test_print_is_sorted() {
        let s = session("");
        let s = with_rect(s, (5, 5), (6, 6), "zulu");
        let mut s = with_rect(s, (0, 0), (1, 2), "alfa");

        print(&mut s).unwrap();
        assert_eq!(
            output(&s),
            "Rectangles currently present in grid\n\
             ------------------------------\n\
             \"alfa\" - (0, 0) - (1, 2)\n\
             \"zulu\" - (5, 5) - (6, 6)\n\
             ------------------------------\n"
        );
    }

    #[test]
    fn test_add() {
        let mut s = session("0\n0\nten\n10\n10\nabcd\n");
        add(&mut s).unwrap();

        assert_eq!(
            s.grid.find_rectangle_by_name("abcd"),
            Some(&Rectangle::new((0, 0).into(), (10, 10).into(), "abcd"))
        );
        let out = output(&s);
        assert!(out.contains("Illegal input! Input must be an integer."));
        assert!(out.contains("Successfully added rectangle \"abcd\" to grid!"));
        assert!(out.contains("\"abcd\" - (0, 0) - (10, 10)"));
    }

    #[test]
    fn test_add_reprompts_bad_names() {
        let mut s = session("0\n0\n1\n1\nab\nABCD\nab1d\nwxyz\n");
        add(&mut s).unwrap();

        assert!(s.grid.contains_name("wxyz"));
        assert_eq!(s.grid.len(), 1);
        let out = output(&s);
        assert_eq!(out.matches("Illegal name \"").count(), 3);
        assert!(out.contains("character 'A' in rectangle name must be a lowercase letter"));
    }

    #[test]
    fn test_add_restarts_after_grid_error() {
        let s = session(
            "5\n5\n2\n2\nijkl\n0\n0\n700\n1\nefgh\n\
             1\n1\n2\n2\nabcd\n1\n1\n2\n2\nefgh\n",
        );
        let mut s = with_rect(s, (0, 0), (10, 10), "abcd");
        add(&mut s).unwrap();

        let out = output(&s);
        assert!(out.contains(
            "Illegal size specified: Rectangle ijkl must have a lower left corner \
             with a lower Y coordinate"
        ));
        assert!(out.contains(
            "Illegal size specified: Rectangle efgh has width exceeding grid width 600"
        ));
        assert!(out.contains(
            "Illegal name specified: a rectangle named abcd already exists in this grid"
        ));
        assert_eq!(s.grid.len(), 2);
        assert_eq!(
            s.grid.find_rectangle_by_name("efgh").map(Rectangle::top_right),
            Some(Point::new(2, 2))
        );
    }

    #[test]
    fn test_remove() {
        let s = session("abcd\nabcd\n");
        let mut s = with_rect(s, (0, 0), (10, 10), "abcd");

        remove(&mut s).unwrap();
        assert!(s.grid.is_empty());
        assert!(output(&s).contains("Removed rectangle \"abcd\"."));

        remove(&mut s).unwrap();
        assert!(output(&s).contains("No rectangle with name \"abcd\" exists in the grid."));
    }
}
