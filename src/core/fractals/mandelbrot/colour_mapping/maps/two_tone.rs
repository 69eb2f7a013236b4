use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Default scheme used when no palette is loaded.
///
/// Points that never escaped are opaque white, everything else is transparent
/// black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotTwoTone {
    max_iterations: u32,
}

impl ColourMap for MandelbrotTwoTone {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        if iterations == self.max_iterations {
            Colour::WHITE
        } else {
            Colour::TRANSPARENT
        }
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::TwoTone.display_name()
    }
}

impl MandelbrotTwoTone {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
