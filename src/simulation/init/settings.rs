use crate::core::error::Result;

use super::perf_stats::ResolveStats;
use super::LevelCore;

pub(super) fn enable_perf_metrics(level: &mut LevelCore, enabled: bool) {
    if enabled && !level.perf_enabled {
        level.perf_stats.reset();
    }
    level.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(level: &LevelCore) -> ResolveStats {
    level.perf_stats.clone()
}

pub(super) fn set_slope_max_height(level: &mut LevelCore, height: i32) -> Result<()> {
    let mut config = level.config;
    config.slope_max_height = height;
    config.validate()?;
    level.config = config;
    Ok(())
}
