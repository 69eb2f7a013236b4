use crate::core::data::colour::Colour;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one colour")]
    Empty,
}

/// Cyclically indexed colour table.
///
/// Always holds at least one colour; "no palette" is expressed as
/// `Option<Palette>` by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour at `index mod len`.
    #[inline]
    #[must_use]
    pub fn wrapping_get(&self, index: u32) -> Colour {
        self.colours[index as usize % self.colours.len()]
    }
}
