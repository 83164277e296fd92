use bevy::prelude::*;

/// Lifecycle of a run. Playing -> GameOver happens once per run; only a restart goes back.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RunState {
    #[default]
    Playing,
    GameOver,
}

pub struct RunStatePlugin;

impl Plugin for RunStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<RunState>()
            .add_systems(OnEnter(RunState::GameOver), log_game_over);
    }
}

fn log_game_over() {
    info!(target: "game_over", "=== GAME OVER === (press R or click Play Again)");
}
