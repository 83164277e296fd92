#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::app::state::RunState;
#[cfg(feature = "debug")]
use crate::gameplay::drop::{DropController, DropPhase};
#[cfg(feature = "debug")]
use crate::interaction::inputmap::types::InputMap;

#[cfg(feature = "debug")]
#[derive(Component)]
pub(crate) struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::srgb(0.25, 0.2, 0.3)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            bottom: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
        Name::new("DebugOverlay"),
    ));
}

#[cfg(feature = "debug")]
pub(crate) fn overlay_line(
    stats: &DebugStats,
    state: &DebugState,
    run: RunState,
    controller: &DropController,
) -> String {
    let phase = match &controller.phase {
        DropPhase::Aiming => String::from("aiming"),
        DropPhase::Cooldown(t) => format!("cooldown {:.2}s", t.remaining_secs()),
    };
    // Counts per tier up to the highest one present, e.g. "3/0/1".
    let histogram = stats
        .highest_tier
        .map(|top| {
            stats
                .tier_histogram
                .get(..=top)
                .unwrap_or(stats.tier_histogram.as_slice())
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    format!(
        "FPS {:.1} ft {:.1}ms | {:?} | fruits {} top {} [{}] | on line {} | merges {} | drops {} {} | wire {}",
        stats.fps,
        stats.frame_time_ms,
        run,
        stats.fruit_count,
        stats
            .highest_tier
            .map_or_else(|| String::from("-"), |t| t.to_string()),
        histogram,
        stats.line_contacts,
        stats.merges,
        controller.drops,
        phase,
        if state.rapier_wireframe { "on" } else { "off" },
    )
}

#[cfg(feature = "debug")]
pub(crate) fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    run: Res<State<RunState>>,
    controller: Res<DropController>,
    input_map: Res<InputMap>,
    mut q_text: Query<&mut Text, With<DebugOverlayText>>,
) {
    let Ok(mut text) = q_text.single_mut() else {
        return;
    };
    if !state.overlay_visible {
        text.0.clear();
        return;
    }
    let mut line = overlay_line(&stats, &state, *run.get(), &controller);
    let held: Vec<&str> = input_map
        .actions
        .iter()
        .filter(|meta| input_map.pressed(&meta.name))
        .map(|meta| meta.name.as_str())
        .collect();
    if !held.is_empty() {
        line.push_str("\nactions: ");
        line.push_str(&held.join(", "));
    }
    text.0 = line;
}

#[cfg(all(test, feature = "debug"))]
mod tests {
    use super::*;

    #[test]
    fn overlay_line_reports_phase_and_tier() {
        let stats = DebugStats {
            fps: 60.0,
            frame_time_ms: 16.7,
            fruit_count: 3,
            tier_histogram: vec![2, 1],
            highest_tier: Some(1),
            line_contacts: 0,
            merges: 4,
        };
        let state = DebugState::default();
        let mut controller = DropController::default();
        let line = overlay_line(&stats, &state, RunState::Playing, &controller);
        assert!(line.contains("fruits 3 top 1 [2/1]"), "{line}");
        assert!(line.contains("aiming"), "{line}");

        controller.present(|| 0);
        controller.release(1.0);
        let line = overlay_line(&stats, &state, RunState::GameOver, &controller);
        assert!(line.contains("GameOver"), "{line}");
        assert!(line.contains("cooldown 1.00s"), "{line}");

        let empty = DebugStats::default();
        let line = overlay_line(&empty, &state, RunState::Playing, &controller);
        assert!(line.contains("fruits 0 top - []"), "{line}");
    }
}
