use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use super::state::RunState;
use crate::gameplay::score::Score;
use crate::interaction::inputmap::types::{actions, InputMap};

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(RunState::GameOver), spawn_game_over_ui)
            .add_systems(
                Update,
                (restart_on_key, restart_on_button).run_if(in_state(RunState::GameOver)),
            )
            .add_systems(OnExit(RunState::GameOver), despawn_game_over_ui);
    }
}

#[derive(Component)]
struct GameOverUiRoot;

#[derive(Component)]
pub struct PlayAgainButton;

fn spawn_game_over_ui(mut commands: Commands, score: Res<Score>) {
    commands
        .spawn((
            GameOverUiRoot,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GlobalZIndex(1000),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    padding: UiRect::all(Val::Px(40.0)),
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
                BorderRadius::all(Val::Px(10.0)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new("Game Over"),
                    TextFont { font_size: 36.0, ..default() },
                    TextColor(Color::BLACK),
                ));
                panel.spawn((
                    Text::new(format!("Your Score: {}", score.current)),
                    TextFont { font_size: 22.0, ..default() },
                    TextColor(Color::BLACK),
                ));
                panel.spawn((
                    Text::new(format!("Best: {}", score.best)),
                    TextFont { font_size: 16.0, ..default() },
                    TextColor(Color::srgb(0.4, 0.4, 0.4)),
                ));
                panel
                    .spawn((
                        Button,
                        PlayAgainButton,
                        Node {
                            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.9, 0.62, 0.72)),
                        BorderRadius::all(Val::Px(6.0)),
                    ))
                    .with_children(|b| {
                        b.spawn((
                            Text::new("Play Again"),
                            TextFont { font_size: 18.0, ..default() },
                            TextColor(Color::WHITE),
                        ));
                    });
            });
        });
}

fn restart_on_key(input: Res<InputMap>, mut next_state: ResMut<NextState<RunState>>) {
    if input.just_pressed(actions::RESTART) {
        info!(target: "game_over", "Restart requested (key)");
        next_state.set(RunState::Playing);
    }
}

fn restart_on_button(
    q_button: Query<&Interaction, (Changed<Interaction>, With<PlayAgainButton>)>,
    mut next_state: ResMut<NextState<RunState>>,
) {
    if q_button.iter().any(|i| *i == Interaction::Pressed) {
        info!(target: "game_over", "Restart requested (button)");
        next_state.set(RunState::Playing);
    }
}

fn despawn_game_over_ui(mut commands: Commands, q_root: Query<Entity, With<GameOverUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
