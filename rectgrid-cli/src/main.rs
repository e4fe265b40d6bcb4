use anyhow::{anyhow, bail, Context, Result};
use env_logger::Env;
use log::info;
use rectgrid::{loader, Grid, Point, Rectangle, Shape, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::env;

const USAGE: &str = "\
Usage: rectgrid-cli <file> <command> [args]

Commands:
  list                       print all rectangles sorted by name
  intersect <a> <b>          print the intersection of two rectangles
  union <a> <b>              print the bounding box of two rectangles
  contains <name> <x> <y>    check whether a point lies within a rectangle
  stats <name>               print perimeter and area of a rectangle";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .context("Failed building logger")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let [path, command, rest @ ..] = args.as_slice() else {
        bail!("{USAGE}");
    };

    let width = dimension_from_env("RECTGRID_WIDTH", DEFAULT_WIDTH)?;
    let height = dimension_from_env("RECTGRID_HEIGHT", DEFAULT_HEIGHT)?;
    let mut grid = Grid::new(width, height)?;

    let report = loader::load_file(&mut grid, path)
        .with_context(|| format!("Failed reading {path}"))?;
    info!(
        "Loaded {} rectangles from {path}, skipped {} lines",
        report.added.len(),
        report.skipped.len()
    );

    for line in run(&grid, command, rest)? {
        println!("{line}");
    }

    Ok(())
}

fn run(grid: &Grid, command: &str, args: &[String]) -> Result<Vec<String>> {
    let res: Vec<String> = match (command, args) {
        ("list", []) => grid.iter().map(ToString::to_string).collect(),
        ("intersect", [a, b]) => {
            let a = find(grid, a)?;
            let b = find(grid, b)?;
            match a.intersection(b) {
                Some(rect) => vec![rect.to_string()],
                None => vec!["No intersection found!".to_owned()],
            }
        }
        ("union", [a, b]) => vec![find(grid, a)?.union_rectangle(find(grid, b)?).to_string()],
        ("contains", [name, x, y]) => {
            let point = Point::new(parse_int(x)?, parse_int(y)?);
            let inside = find(grid, name)?.contains_point(point);
            vec![format!(
                "{point} is {}within {name}",
                if inside { "" } else { "not " }
            )]
        }
        ("stats", [name]) => {
            let rect = find(grid, name)?;
            vec![
                rect.to_string(),
                format!("perimeter: {}", rect.perimeter()),
                format!("area: {}", rect.area()),
            ]
        }
        _ => bail!("Invalid command or arguments.\n\n{USAGE}"),
    };
    Ok(res)
}

fn find<'a>(grid: &'a Grid, name: &str) -> Result<&'a Rectangle> {
    grid.find_rectangle_by_name(name)
        .ok_or_else(|| anyhow!("No rectangle with name \"{name}\" exists in the grid."))
}

fn parse_int(value: &str) -> Result<i64> {
    value
        .parse()
        .with_context(|| format!("{value:?} is not an integer"))
}

fn dimension_from_env(key: &str, default: i64) -> Result<i64> {
    match env::var(key) {
        Ok(v) => parse_int(&v).with_context(|| format!("Invalid value for {key}")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err).with_context(|| format!("Invalid value for {key}")),
    }
}
