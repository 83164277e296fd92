use bevy::prelude::*;

use crate::app::state::RunState;

/// Points of the current run plus the best run of this session.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub current: u64,
    pub best: u64,
}

impl Score {
    pub fn award(&mut self, points: u64) {
        self.current = self.current.saturating_add(points);
        self.best = self.best.max(self.current);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(OnEnter(RunState::Playing), reset_score);
    }
}

fn reset_score(mut score: ResMut<Score>) {
    if score.current > 0 {
        info!(target: "score", "Run finished with {} (best {})", score.current, score.best);
    }
    score.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_tracks_maximum() {
        let mut s = Score::default();
        s.award(4);
        s.award(8);
        assert_eq!(s.current, 12);
        s.reset();
        s.award(1);
        assert_eq!(s.current, 1);
        assert_eq!(s.best, 12);
    }
}
