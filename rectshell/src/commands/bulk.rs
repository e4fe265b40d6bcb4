use super::Session;
use anyhow::Result;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use rectgrid::{loader, lowercase_names, Grid, LoadReport, RectGenerator};
use std::{
    io::{BufRead, Write},
    path::Path,
};

pub fn random<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let count = loop {
        let count = s
            .console
            .prompt_int("Enter the number of random rectangles to add: ")?;
        match usize::try_from(count) {
            Ok(count) => break count,
            Err(_) => s.console.say("Illegal input! Input must not be negative.")?,
        }
    };

    let names = lowercase_names(StdRng::from_rng(&mut s.rng)?);
    let mut generator = RectGenerator::new(names, &mut s.rng);
    let added = generator.populate(&mut s.grid, count)?;

    s.console
        .say(format!("Added {} random rectangles.", added.len()))?;
    s.console.pause()?;
    super::rectangle::print(s)
}

pub fn load<R: BufRead, W: Write>(s: &mut Session<R, W>) -> Result<()> {
    let path = s.console.prompt("Enter the path of the file to load: ")?;

    match load_file(&mut s.grid, &path) {
        Ok(report) => {
            s.console.say(format!(
                "Added {} rectangles, skipped {} lines.",
                report.added.len(),
                report.skipped.len()
            ))?;
            for err in &report.skipped {
                s.console.say(format!("  {err}"))?;
            }
        }
        Err(err) => s
            .console
            .say(format!("Could not read \"{path}\": {err}"))?,
    }

    s.console.pause()?;
    super::rectangle::print(s)
}

/// Bulk-loads the rectangles in `path` into `grid` and logs a summary.
pub fn load_file<P: AsRef<Path>>(grid: &mut Grid, path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    let report = loader::load_file(grid, path)?;

    if report.skipped.is_empty() {
        info!(
            "Loaded {} rectangles from {}",
            report.added.len(),
            path.display()
        );
    } else {
        warn!(
            "Loaded {} rectangles from {}, skipped {} lines",
            report.added.len(),
            path.display(),
            report.skipped.len()
        );
    }

    Ok(report)
}
