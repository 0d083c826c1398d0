use anyhow::{bail, Context, Result};
use isoscene_engine::projection::Projection;

/// Host settings, overridable from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub projection: Projection,
    /// Floor is `grid × grid` blocks.
    pub grid: u32,
    pub frames: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            projection: Projection::TwoByOneIsometric,
            grid: 4,
            frames: 48,
        }
    }
}

const MAX_GRID: u32 = 64;

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `ISOSCENE_PROJECTION`, `ISOSCENE_GRID` and `ISOSCENE_FRAMES`
    /// through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("ISOSCENE_PROJECTION") {
            config.projection = Projection::from_name(&name)
                .with_context(|| format!("ISOSCENE_PROJECTION: unknown projection {name:?} (expected `true` or `2:1`)"))?;
        }

        if let Some(raw) = lookup("ISOSCENE_GRID") {
            config.grid = raw
                .trim()
                .parse()
                .with_context(|| format!("ISOSCENE_GRID: {raw:?} is not a number"))?;
            if config.grid == 0 || config.grid > MAX_GRID {
                bail!("ISOSCENE_GRID: must be between 1 and {MAX_GRID}, got {}", config.grid);
            }
        }

        if let Some(raw) = lookup("ISOSCENE_FRAMES") {
            config.frames = raw
                .trim()
                .parse()
                .with_context(|| format!("ISOSCENE_FRAMES: {raw:?} is not a number"))?;
        }

        Ok(config)
    }
}
