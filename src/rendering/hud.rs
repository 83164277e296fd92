use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::drop::DropController;
use crate::gameplay::fruits::FruitTable;
use crate::gameplay::score::Score;
use crate::rendering::palette::palette::{tier_color, SCORE_TEXT};

const PREVIEW_BOX: f32 = 100.0;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct NextFruitPreview;

/// Tier currently drawn in the preview; avoids rebuilding it every frame.
#[derive(Component, Default)]
struct PreviewTier(Option<usize>);

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_score_text, update_next_preview));
    }
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(SCORE_TEXT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                right: Val::Px(20.0),
                width: Val::Px(PREVIEW_BOX),
                height: Val::Px(PREVIEW_BOX),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(10.0)),
        ))
        .with_children(|p| {
            p.spawn((
                Node::default(),
                BorderRadius::MAX,
                BackgroundColor(Color::NONE),
                NextFruitPreview,
                PreviewTier::default(),
            ));
        });
}

pub fn score_label(score: &Score) -> String {
    format!("Score: {}", score.current)
}

fn update_score_text(score: Res<Score>, mut q_text: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    let Ok(mut text) = q_text.single_mut() else { return; };
    let label = score_label(&score);
    if text.0 != label {
        text.0 = label;
    }
}

fn update_next_preview(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    table: Res<FruitTable>,
    controller: Res<DropController>,
    asset_server: Res<AssetServer>,
    mut q_preview: Query<(Entity, &mut Node, &mut BackgroundColor, &mut PreviewTier), With<NextFruitPreview>>,
) {
    let Ok((entity, mut node, mut bg, mut shown)) = q_preview.single_mut() else { return; };
    if shown.0 == controller.next && !table.is_changed() {
        return;
    }
    shown.0 = controller.next;
    let Some(kind) = controller.next.and_then(|t| table.get(t)) else {
        bg.0 = Color::NONE;
        commands.entity(entity).remove::<ImageNode>();
        return;
    };
    // Scale down so the biggest droppable tier still fits the box.
    let size = (kind.radius * 2.0).min(PREVIEW_BOX);
    node.width = Val::Px(size);
    node.height = Val::Px(size);
    if cfg.sprites {
        bg.0 = Color::NONE;
        commands
            .entity(entity)
            .insert(ImageNode::new(asset_server.load(format!("{}.png", kind.name))));
    } else if let Some(tier) = controller.next {
        bg.0 = tier_color(table.theme, tier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_current_run() {
        let mut s = Score::default();
        s.award(3);
        assert_eq!(score_label(&s), "Score: 3");
    }
}
