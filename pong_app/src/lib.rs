//! Headless driver for the Pong engine: fixed-tick loop plus the input,
//! render and audio seams the engine talks to.

pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod render;

pub use app::*;
pub use audio::*;
pub use config::*;
pub use input::*;
pub use render::*;

#[cfg(test)]
mod tests;
