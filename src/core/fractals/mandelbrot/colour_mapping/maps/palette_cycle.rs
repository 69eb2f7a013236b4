use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

/// Colours a pixel with `palette[iterations % palette.len()]`.
///
/// The in-set count gets no special treatment.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotPaletteCycle<'a> {
    palette: &'a Palette,
}

impl ColourMap for MandelbrotPaletteCycle<'_> {
    #[inline]
    fn map(&self, iterations: u32) -> Colour {
        self.palette.wrapping_get(iterations)
    }

    fn display_name(&self) -> &str {
        MandelbrotColourMapKinds::PaletteCycle.display_name()
    }
}

impl<'a> MandelbrotPaletteCycle<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_palette() -> Palette {
        Palette::new(vec![
            Colour::new(1, 0, 0, 255),
            Colour::new(2, 0, 0, 255),
            Colour::new(3, 0, 0, 255),
            Colour::new(4, 0, 0, 255),
        ])
        .unwrap()
    }

    #[test]
    fn test_map_indexes_palette() {
        let palette = create_palette();
        let mapper = MandelbrotPaletteCycle::new(&palette);

        assert_eq!(mapper.map(0), Colour::new(1, 0, 0, 255));
        assert_eq!(mapper.map(3), Colour::new(4, 0, 0, 255));
    }

    #[test]
    fn test_map_wraps_counts_past_palette_length() {
        let palette = create_palette();
        let mapper = MandelbrotPaletteCycle::new(&palette);

        assert_eq!(mapper.map(4), Colour::new(1, 0, 0, 255));
        assert_eq!(mapper.map(9), Colour::new(2, 0, 0, 255));
        assert_eq!(mapper.map(1024), palette.colours()[0]);
    }
}
