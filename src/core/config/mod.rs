pub mod config;

pub use config::{
    is_missing_local_layer, LOCAL_LAYER_FILE,
    ConfigOverrides,
    DropConfig, FruitPhysicsConfig, GameConfig, GameOverConfig, GravityConfig, WellConfig,
    WindowConfig,
};
