//! The escape-time core: evaluator, colour policies and the frame renderer.
//!
//! Nothing in here touches files, windows or logging; callers hand in a
//! [`Viewport`](data::viewport::Viewport) and a
//! [`PixelBuffer`](data::pixel_buffer::PixelBuffer) and get the buffer back filled.

pub mod actions;
pub mod data;
pub mod fractals;
