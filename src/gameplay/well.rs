use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::RunState;
use crate::core::components::{DeathLine, WellPart, WorldEntity};
use crate::core::config::{GameConfig, WellConfig};

/// Geometry the current walls were built from. Config edits reach it on the next run.
#[derive(Resource, Debug, Clone, PartialEq, Deref)]
pub struct ActiveWell(pub WellConfig);

impl FromWorld for ActiveWell {
    fn from_world(world: &mut World) -> Self {
        Self(
            world
                .get_resource::<GameConfig>()
                .map(|cfg| cfg.well.clone())
                .unwrap_or_default(),
        )
    }
}

pub struct WellPlugin;

impl Plugin for WellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveWell>()
            .add_systems(OnEnter(RunState::Playing), build_well)
            .add_systems(OnExit(RunState::GameOver), clear_world);
    }
}

/// (centre, full size) of the two side walls and the floor.
pub fn well_parts(well: &WellConfig) -> [(Vec2, Vec2); 3] {
    let wall_h = well.top() - well.floor_top();
    let wall_cy = (well.top() + well.floor_top()) * 0.5;
    let wall_cx = well.width * 0.5 - well.wall_thickness * 0.5;
    let wall = Vec2::new(well.wall_thickness, wall_h);
    [
        (Vec2::new(-wall_cx, wall_cy), wall),
        (Vec2::new(wall_cx, wall_cy), wall),
        (
            Vec2::new(0.0, -well.height * 0.5 + well.floor_thickness * 0.5),
            Vec2::new(well.width, well.floor_thickness),
        ),
    ]
}

fn build_well(mut commands: Commands, cfg: Res<GameConfig>, mut active: ResMut<ActiveWell>) {
    if active.0 != cfg.well {
        info!(target: "well", "Well geometry updated for this run");
        active.0 = cfg.well.clone();
    }
    let well = &active.0;
    for (center, size) in well_parts(well) {
        commands.spawn((
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            WellPart { size },
            WorldEntity,
            Name::new("WellPart"),
        ));
    }
    commands.spawn((
        Transform::from_xyz(0.0, well.death_line_y, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(well.width * 0.5, well.death_line_thickness * 0.5),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        DeathLine { width: well.width },
        WorldEntity,
        Name::new("DeathLine"),
    ));
    info!(target: "well", "Well built: {}x{} death line at y={}", well.width, well.height, well.death_line_y);
}

fn clear_world(mut commands: Commands, q_world: Query<Entity, With<WorldEntity>>) {
    let mut n = 0usize;
    for e in &q_world {
        commands.entity(e).despawn();
        n += 1;
    }
    info!(target: "well", "Cleared world ({n} entities)");
}
