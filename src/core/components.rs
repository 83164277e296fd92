use bevy::prelude::*;

/// Marker component identifying a fruit body (holds physics body & collider).
#[derive(Component, Debug)]
pub struct Fruit;

/// Index into the active `FruitTable`. Two fruits merge only when their tiers are equal.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq, Eq)]
pub struct FruitTier(pub usize);

/// Logical radius used both for the collider and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct FruitRadius(pub f32);

/// The fruit waiting at the spawn point; physics stays disabled until it is dropped.
#[derive(Component, Debug)]
pub struct HeldFruit;

/// Tag component for the circle mesh child used for flat rendering.
#[derive(Component)]
pub struct FruitCircleVisual;

/// Static piece of the well (wall or floor) with its full size for rendering.
#[derive(Component, Debug, Copy, Clone)]
pub struct WellPart {
    pub size: Vec2,
}

/// Sensor strip; a fruit resting on it long enough ends the run.
#[derive(Component, Debug)]
pub struct DeathLine {
    pub width: f32,
}

/// Time a released fruit has spent overlapping the death line.
#[derive(Component, Debug, Default, Copy, Clone)]
pub struct LineContact {
    pub elapsed: f32,
}

/// Everything cleared on restart (fruits, walls, death line).
#[derive(Component, Debug)]
pub struct WorldEntity;
