//! Rendering
//!
//! `frame` turns the session into a flat list of draw commands after the
//! tick has finished mutating it; backends only ever see that list.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{DrawCommand, Frame, PipeCap, TextLine};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
