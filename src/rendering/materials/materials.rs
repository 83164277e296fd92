use bevy::prelude::*;

use crate::core::components::{DeathLine, Fruit, FruitCircleVisual, FruitRadius, FruitTier, WellPart};
use crate::core::config::GameConfig;
use crate::gameplay::fruits::FruitTable;
use crate::rendering::palette::palette::{tier_color, DEATH_LINE, WALL};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FruitMaterialsInitSet;

/// Unit circle mesh plus one material per tier of the active theme.
#[derive(Resource)]
pub struct FruitMaterials {
    pub circle: Handle<Mesh>,
    pub tiers: Vec<Handle<ColorMaterial>>,
}

pub struct MaterialsPlugin;
impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                setup_fruit_materials
                    .run_if(resource_changed::<FruitTable>)
                    .in_set(FruitMaterialsInitSet),
                (attach_fruit_visuals, attach_well_visuals, attach_line_visuals),
            )
                .chain(),
        );
    }
}

/// (Re)builds the per-tier materials whenever the active table changes (startup, theme swap).
fn setup_fruit_materials(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    table: Res<FruitTable>,
    existing: Option<Res<FruitMaterials>>,
) {
    let circle = match existing {
        Some(prev) => prev.circle.clone(),
        None => meshes.add(Circle { radius: 0.5 }),
    };
    let tiers = (0..table.len())
        .map(|tier| materials.add(tier_color(table.theme, tier)))
        .collect();
    info!(target: "materials", "Fruit materials built for {:?} ({} tiers)", table.theme, table.len());
    commands.insert_resource(FruitMaterials { circle, tiers });
}

fn attach_fruit_visuals(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    table: Res<FruitTable>,
    asset_server: Res<AssetServer>,
    fruit_materials: Option<Res<FruitMaterials>>,
    q_new: Query<(Entity, &FruitTier, &FruitRadius), Added<Fruit>>,
) {
    let Some(mats) = fruit_materials else { return; };
    for (entity, tier, radius) in &q_new {
        let diameter = radius.0 * 2.0;
        commands
            .entity(entity)
            .insert(Visibility::default())
            .with_children(|parent| {
                if cfg.sprites {
                    if let Some(kind) = table.get(tier.0) {
                        parent.spawn((
                            Sprite {
                                image: asset_server.load(format!("{}.png", kind.name)),
                                custom_size: Some(Vec2::splat(diameter)),
                                ..default()
                            },
                            FruitCircleVisual,
                        ));
                        return;
                    }
                }
                let Some(material) = mats.tiers.get(tier.0) else { return; };
                parent.spawn((
                    Mesh2d(mats.circle.clone()),
                    MeshMaterial2d(material.clone()),
                    Transform::from_scale(Vec3::splat(diameter)),
                    FruitCircleVisual,
                ));
            });
    }
}

fn attach_well_visuals(mut commands: Commands, q_new: Query<(Entity, &WellPart), Added<WellPart>>) {
    for (entity, part) in &q_new {
        commands.entity(entity).insert(Sprite::from_color(WALL, part.size));
    }
}

fn attach_line_visuals(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    q_new: Query<(Entity, &DeathLine), Added<DeathLine>>,
) {
    for (entity, line) in &q_new {
        commands.entity(entity).insert(Sprite::from_color(
            DEATH_LINE,
            Vec2::new(line.width, cfg.well.death_line_thickness),
        ));
    }
}
