//! Timed exit for unattended smoke runs (`window.autoClose` / `--auto-close`).
use bevy::prelude::*;

use crate::app::state::RunState;
use crate::core::config::GameConfig;
use crate::gameplay::drop::DropController;
use crate::gameplay::score::Score;

#[derive(Resource, Deref, DerefMut)]
struct SessionDeadline(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline)
            .add_systems(Last, exit_at_deadline);
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: session ends after {secs} seconds");
        commands.insert_resource(SessionDeadline(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn exit_at_deadline(
    time: Res<Time>,
    deadline: Option<ResMut<SessionDeadline>>,
    score: Res<Score>,
    controller: Res<DropController>,
    state: Res<State<RunState>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut deadline) = deadline else { return; };
    if !deadline.tick(time.delta()).just_finished() {
        return;
    }
    info!(
        "AutoClose: exiting; state={:?} score={} best={} drops={}",
        state.get(),
        score.current,
        score.best,
        controller.drops
    );
    ev_exit.write(AppExit::Success);
}
