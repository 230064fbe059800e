pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{CameraConfig, SceneConfig, ZoomConfig, MAX_STAR_COUNT};
pub use api::context::SimContext;
pub use api::error::ConfigError;
pub use api::types::{Body, TaskStatus, BODY_COUNT};
pub use components::body::{Orbit, OrbitingBody};
pub use components::starfield::{StarField, STAR_FLOATS};
pub use core::rng::Rng;
pub use core::time::FrameClock;
pub use renderer::camera::PerspectiveCamera;
pub use renderer::handles::{CameraHandle, MeshHandle, SceneHandle};
pub use input::queue::{InputEvent, InputQueue};
pub use input::controls::OrbitControls;
pub use assets::manifest::{SceneDescription, DEFAULT_TEXTURE_BASE};
pub use bridge::frame::FrameBuffer;
pub use bridge::protocol::{BodySlot, CameraSlot, FrameHeader, ProtocolLayout, PROTOCOL_VERSION};
pub use systems::frame::run_frame;
pub use systems::input::apply_input;
pub use systems::viewport::resize;
pub use systems::zoom::{ScrollOutcome, ZoomController, ZoomPhase};
