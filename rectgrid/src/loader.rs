//! Bulk loading of rectangles from text.
//!
//! Every line holds one rectangle as `NAME;(x,y);(x,y)` with the bottom left
//! corner first. Blank lines and lines starting with `#` are ignored. A line
//! that can not be parsed or that the grid refuses is skipped and reported;
//! it never aborts the rest of the load.

use crate::{
    error::{FormatError, LoadError},
    grid::Grid,
    names::NAME_LEN,
    point::Point,
    rectangle::Rectangle,
};
use log::{debug, warn};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub added: Vec<String>,
    pub skipped: Vec<LoadError>,
}

/// Parses a single `NAME;(x,y);(x,y)` line.
pub fn parse_line(line: &str) -> Result<Rectangle, FormatError> {
    let fields: Vec<_> = line.trim().split(';').collect();
    let [name, bottom_left, top_right] = fields.as_slice() else {
        return Err(FormatError::FieldCount(fields.len()));
    };

    let name = name.trim();
    if name.chars().count() != NAME_LEN {
        return Err(FormatError::NameLength(name.to_owned()));
    }

    Ok(Rectangle::new(
        parse_point(bottom_left)?,
        parse_point(top_right)?,
        name,
    ))
}

/// Adds every rectangle in `text` to `grid`.
pub fn load_str(grid: &mut Grid, text: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for (i, line) in text.lines().enumerate() {
        load_line(grid, i + 1, line, &mut report);
    }
    report
}

/// Adds every rectangle read from `reader` to `grid`.
///
/// Only failing to read from `reader` is returned as an error. Lines read up
/// to that point stay in the grid. A line that is not valid UTF-8 is skipped
/// like any other malformed line.
pub fn load<R: BufRead>(grid: &mut Grid, mut reader: R) -> io::Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        match std::str::from_utf8(&buf) {
            Ok(line) => load_line(grid, line_no, line, &mut report),
            Err(err) => skip(
                &mut report,
                LoadError::new(line_no, FormatError::Encoding(err)),
            ),
        }
    }

    Ok(report)
}

pub fn load_file<P: AsRef<Path>>(grid: &mut Grid, path: P) -> io::Result<LoadReport> {
    let path = path.as_ref();
    debug!("Loading rectangles from {}", path.display());
    let file = File::open(path)?;
    load(grid, BufReader::new(file))
}

fn load_line(grid: &mut Grid, line_no: usize, line: &str, report: &mut LoadReport) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let res = parse_line(line)
        .map_err(|e| LoadError::new(line_no, e))
        .and_then(|rect| {
            let name = rect.name().to_owned();
            grid.add_rectangle(rect)
                .map(|_| name)
                .map_err(|e| LoadError::new(line_no, e))
        });

    match res {
        Ok(name) => report.added.push(name),
        Err(err) => skip(report, err),
    }
}

fn skip(report: &mut LoadReport, err: LoadError) {
    warn!("Skipping rectangle: {err}");
    report.skipped.push(err);
}

fn parse_point(field: &str) -> Result<Point, FormatError> {
    let field = field.trim();
    let (x, y) = field
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| s.split_once(','))
        .ok_or_else(|| FormatError::Point(field.to_owned()))?;

    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(value: &str) -> Result<i64, FormatError> {
    let value = value.trim();
    value.parse().map_err(|source| FormatError::Coordinate {
        value: value.to_owned(),
        source,
    })
}
