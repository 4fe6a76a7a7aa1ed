//! Source-to-icons conversion run.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::error::Result;
use crate::image;

use super::target::{targets, IconTarget, STORE_LISTING_DIR};

/// Root of the app project the icons are generated for.
const PROJECT_ROOT: &str = "/srv/temporary-memo";

/// Configuration for an icon generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source image. Any format the decoder supports.
    pub input: PathBuf,

    /// Android resource directory holding the `mipmap-*` directories.
    pub res_dir: PathBuf,

    /// Directory receiving the store-listing icon.
    pub store_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let root = PathBuf::from(PROJECT_ROOT);
        Self {
            input: root.join("screenshots").join("S__22053091_0.jpg"),
            res_dir: root.join("app").join("src").join("main").join("res"),
            store_dir: root.join(STORE_LISTING_DIR),
        }
    }
}

/// Turns one source image into the full set of launcher and store icons.
pub struct IconGenerator {
    config: Config,
}

impl IconGenerator {
    /// Create a generator for the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Icons this generator will write, in write order.
    #[must_use]
    pub fn targets(&self) -> Vec<IconTarget> {
        targets(&self.config.res_dir, &self.config.store_dir)
    }

    /// Generate every icon.
    ///
    /// # Errors
    ///
    /// See [`IconGenerator::run_with`].
    pub fn run(&self) -> Result<Vec<IconTarget>> {
        self.run_with(|_| {})
    }

    /// Generate every icon, calling `on_written` after each file is saved.
    ///
    /// The source is loaded and keyed once, before any output directory is
    /// touched. Each icon is then resized from the keyed image. The first
    /// failure stops the run; icons already written stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or any icon cannot be
    /// written.
    pub fn run_with<F>(&self, mut on_written: F) -> Result<Vec<IconTarget>>
    where
        F: FnMut(&IconTarget),
    {
        tracing::info!("Loading source image: {}", self.config.input.display());
        let mut source = image::load_rgba(&self.config.input)?;

        let keyed = image::apply_transparency_key(&mut source);
        tracing::debug!(
            "Keyed {keyed} of {} pixels to transparent",
            u64::from(source.width()) * u64::from(source.height())
        );

        let targets = self.targets();
        for target in &targets {
            tracing::info!("Generating {}", target.describe());
            image::save_square_png(&source, &target.path, target.size)?;
            on_written(target);
        }

        tracing::info!("Generated {} icons", targets.len());
        Ok(targets)
    }
}

/// Closing summary listing every icon a run produces.
#[must_use]
pub fn summary() -> String {
    let config = Config::default();
    let mut out = String::from("All icon files created successfully!\n\nGenerated icons:\n");
    for target in targets(&config.res_dir, &config.store_dir) {
        let _ = writeln!(out, "- {}", target.describe());
    }
    out
}
