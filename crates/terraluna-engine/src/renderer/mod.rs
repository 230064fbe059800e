pub mod camera;
pub mod handles;
