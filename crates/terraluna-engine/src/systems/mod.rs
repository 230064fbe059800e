pub mod frame;
pub mod input;
pub mod viewport;
pub mod zoom;
