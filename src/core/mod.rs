pub mod catalog;
pub mod constants;
pub mod mesh;
pub mod pose;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod sections;
pub mod stage;
pub mod terminal;

pub use catalog::*;
pub use constants::*;
pub use mesh::*;
pub use pose::*;
pub use reveal::*;
pub use scene::*;
pub use scroll::*;
pub use stage::*;
pub use terminal::*;

// Shaders bundled as string constants
pub static AVATAR_WGSL: &str = include_str!("../../shaders/avatar.wgsl");
