use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::colour_mapping::{
    map::MandelbrotColourScheme,
    maps::{palette_cycle::MandelbrotPaletteCycle, two_tone::MandelbrotTwoTone},
};

#[must_use]
pub fn mandelbrot_colour_scheme_factory(
    palette: Option<&Palette>,
    max_iterations: u32,
) -> MandelbrotColourScheme<'_> {
    match palette {
        Some(palette) => MandelbrotColourScheme::PaletteCycle(MandelbrotPaletteCycle::new(palette)),
        None => MandelbrotColourScheme::TwoTone(MandelbrotTwoTone::new(max_iterations)),
    }
}
