//! Level - owns a swatch grid and balance config, resolves actors against it
//!
//! `LevelCore` is the native API; `facade::CollisionWorld` wraps it for JS.
//! The core holds no actors: callers pass one in per resolution call, so the
//! same level can serve any number of sprites in a tick.

use tracing::info;

use crate::core::config::CollisionConfig;
use crate::core::error::Result;
use crate::core::geom::{Point, Rect};
use crate::domain::actor::Actor;
use crate::domain::swatch::Swatch;
use crate::spatial::grid::SwatchGrid;
use crate::systems::collision::{self, Collide, IndexTuple};

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{CollisionWorld, ResolveResult, Sprite};
pub use perf_stats::ResolveStats;

pub struct LevelCore {
    grid: SwatchGrid,
    config: CollisionConfig,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: ResolveStats,
}

impl LevelCore {
    pub fn new(chunk_size: u32) -> Self {
        Self {
            grid: SwatchGrid::new(chunk_size),
            config: CollisionConfig::default(),
            perf_enabled: false,
            perf_stats: ResolveStats::default(),
        }
    }

    pub fn grid(&self) -> &SwatchGrid { &self.grid }

    pub fn config(&self) -> &CollisionConfig { &self.config }

    pub fn pixel_count(&self) -> usize { self.grid.pixel_count() }

    // === Level painting ===

    pub fn add_swatch(&mut self, swatch: Swatch) -> usize {
        self.grid.add_swatch(swatch)
    }

    pub fn add_swatch_json(&mut self, json: &str) -> Result<usize> {
        let swatch: Swatch = serde_json::from_str(json)?;
        Ok(self.grid.add_swatch(swatch))
    }

    pub fn set_pixel(&mut self, point: Point, swatch: usize) -> Result<()> {
        self.grid.set(point, swatch)
    }

    pub fn fill_rect(&mut self, rect: Rect, swatch: usize) -> Result<()> {
        self.grid.fill_rect(rect, swatch)
    }

    pub fn erase_pixel(&mut self, point: Point) -> bool {
        self.grid.erase(point)
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    // === Settings ===

    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        let config = CollisionConfig::from_json(json)?;
        info!(slope_max_height = config.slope_max_height, "loaded collision config");
        self.config = config;
        Ok(())
    }

    pub fn set_slope_max_height(&mut self, height: i32) -> Result<()> {
        settings::set_slope_max_height(self, height)
    }

    /// Enable or disable per-resolve perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get perf totals since metrics were enabled (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> ResolveStats {
        settings::get_perf_stats(self)
    }

    // === Collision ===

    /// Resolve one actor's movement toward `target` for this tick.
    pub fn resolve<A: Actor + ?Sized>(&mut self, actor: &mut A, target: Point) -> (Collide, bool) {
        if !self.perf_enabled {
            return collision::collides_with_grid(actor, &self.grid, target, &self.config);
        }

        let (grid, config) = (&self.grid, &self.config);
        self.perf_stats
            .time(|| collision::collides_with_grid(actor, grid, target, config))
    }

    /// Every intersecting pair of actor boxes.
    pub fn overlapping_pairs(&self, boxes: &[Rect]) -> Vec<IndexTuple> {
        collision::between_boxes(boxes).collect()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
