#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::components::{Fruit, FruitTier, HeldFruit, LineContact};
#[cfg(feature = "debug")]
use crate::gameplay::fruits::FruitTable;
#[cfg(feature = "debug")]
use crate::gameplay::merge::FruitMerged;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    table: Res<FruitTable>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    mut merges: EventReader<FruitMerged>,
    q_fruits: Query<&FruitTier, (With<Fruit>, Without<HeldFruit>)>,
    q_contacts: Query<(), With<LineContact>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    let mut histogram = vec![0usize; table.len()];
    for tier in &q_fruits {
        if let Some(slot) = histogram.get_mut(tier.0) {
            *slot += 1;
        }
    }
    stats.fruit_count = histogram.iter().sum();
    stats.highest_tier = histogram.iter().rposition(|&n| n > 0);
    stats.tier_histogram = histogram;
    stats.line_contacts = q_contacts.iter().count();
    stats.merges += merges.read().count() as u64;
}
