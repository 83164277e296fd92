#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    pub overlay_visible: bool,
    pub rapier_wireframe: bool,
    pub frame_counter: u64,
    pub time_accum: f32,
    pub log_interval: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            overlay_visible: true,
            rapier_wireframe: false,
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 2.0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub fruit_count: usize,
    /// Released fruits per tier.
    pub tier_histogram: Vec<usize>,
    pub highest_tier: Option<usize>,
    pub line_contacts: usize,
    pub merges: u64,
}
