use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    palette_cycle::MandelbrotPaletteCycle, two_tone::MandelbrotTwoTone,
};

/// The colour policy for one frame: either the default two-tone scheme or a
/// loaded palette.
#[derive(Debug, Clone, Copy)]
pub enum MandelbrotColourScheme<'a> {
    TwoTone(MandelbrotTwoTone),
    PaletteCycle(MandelbrotPaletteCycle<'a>),
}

impl MandelbrotColourScheme<'_> {
    #[must_use]
    pub fn kind(&self) -> MandelbrotColourMapKinds {
        match self {
            Self::TwoTone(_) => MandelbrotColourMapKinds::TwoTone,
            Self::PaletteCycle(_) => MandelbrotColourMapKinds::PaletteCycle,
        }
    }
}

impl ColourMap for MandelbrotColourScheme<'_> {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        match self {
            Self::TwoTone(map) => map.map(iterations),
            Self::PaletteCycle(map) => map.map(iterations),
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::TwoTone(map) => map.display_name(),
            Self::PaletteCycle(map) => map.display_name(),
        }
    }
}
