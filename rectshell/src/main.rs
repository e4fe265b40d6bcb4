mod commands;
mod conf;
mod helpers;

use anyhow::{Context, Result};
use commands::Session;
use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use env_logger::Env;
use helpers::Console;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use rectgrid::Grid;
use std::{env, io};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .context("Failed building logger")?;

    let mut b = conf::defaults()?;

    b = add_source_files_for_dir(b, "config");
    b = add_source_files_for_dir(b, "dev.config");
    b = b.add_source(
        Environment::with_prefix("RECTSHELL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    info!("Reading config ...");
    let cfg: conf::Config = b
        .build()
        .context("Failed to build config")?
        .try_deserialize()
        .context("Failed deserializing config")?;
    debug!("Using config: {cfg:#?}");

    let mut grid = Grid::new(cfg.grid.width, cfg.grid.height)?;

    for rect in cfg.rectangles {
        let name = rect.name().to_owned();
        grid.add_rectangle(rect)
            .with_context(|| format!("Failed adding configured rectangle {name}"))?;
    }

    for path in cfg.preload.iter().cloned().chain(env::args().skip(1)) {
        commands::bulk::load_file(&mut grid, &path)
            .with_context(|| format!("Failed loading rectangles from {path}"))?;
    }

    let rng = match cfg.generator.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), cfg.ui);
    Session::new(grid, console, rng).run()
}

fn add_source_files_for_dir(
    builder: ConfigBuilder<DefaultState>,
    name: &str,
) -> ConfigBuilder<DefaultState> {
    builder
        .add_source(File::new(&format!("{name}.yaml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.yml"), FileFormat::Yaml).required(false))
        .add_source(File::new(&format!("{name}.toml"), FileFormat::Toml).required(false))
        .add_source(File::new(&format!("{name}.json"), FileFormat::Json5).required(false))
}
