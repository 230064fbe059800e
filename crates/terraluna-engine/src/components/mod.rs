pub mod body;
pub mod starfield;
