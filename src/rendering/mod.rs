pub mod camera;
pub mod hud;
pub mod materials;
pub mod palette;

use bevy::prelude::*;

use camera::CameraPlugin;
use hud::HudPlugin;
use materials::materials::MaterialsPlugin;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CameraPlugin, MaterialsPlugin, HudPlugin));
    }
}
