mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::explorer::{ExplorerController, NavigationCommand, NavigationParseError};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render, render_frame, render_frame_cancelable, render_frame_serial,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::palette::{Palette, PaletteError};
pub use crate::core::data::pixel_buffer::{BufferAllocation, PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::{Viewport, ViewportError, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS, iterations_until_divergence};
pub use crate::core::fractals::mandelbrot::colour_mapping::{
    factory::mandelbrot_colour_scheme_factory, kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourScheme,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::fractals::mandelbrot::params::IterationParams;
pub use crate::presenters::file::pam::{PamFilePresenter, write_pam};
pub use crate::storage::read_palette_csv::{PaletteLoadError, parse_palette_csv, read_palette_csv};

pub use num_complex::Complex64;
