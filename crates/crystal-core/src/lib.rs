pub mod blend;
pub mod constants;
pub mod error;
pub mod field;
pub mod follower;
pub mod input;
pub mod instances;
pub mod scene;
pub mod scheduler;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use error::ConfigError;
pub use field::*;
pub use follower::*;
pub use input::*;
pub use instances::*;
pub use scene::*;
pub use scheduler::*;
pub use state::*;
