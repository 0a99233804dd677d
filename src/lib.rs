// Library exports for testing
pub use app::App;
pub use collision::{Bounds, overlaps};
pub use entities::{
    Control, Enemy, FormationOffset, GameState, Phase, Projectile, ProjectileOwner,
};
pub use frame::{run_frame, setup_game};
pub use scene::{Scene, SceneError, Sprite, SpriteScene, VisualHandle};

pub mod app;
pub mod collision;
pub mod config;
pub mod entities;
pub mod frame;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scene;
