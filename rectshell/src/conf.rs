use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use rectgrid::{Rectangle, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub grid: Grid,
    pub ui: Ui,
    #[serde(default)]
    pub generator: Generator,
    pub preload: Vec<String>,
    #[serde(default)]
    pub rectangles: Vec<Rectangle>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Grid {
    pub width: i64,
    pub height: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Ui {
    pub clear_screen: bool,
    pub pause: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Generator {
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A config builder holding the default value of every setting.
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("grid.width", DEFAULT_WIDTH)?
        .set_default("grid.height", DEFAULT_HEIGHT)?
        .set_default("ui.clear_screen", true)?
        .set_default("ui.pause", true)?
        .set_default("preload", Vec::<String>::new())
}
