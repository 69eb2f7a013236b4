use crate::core::data::colour::Colour;

/// Maps an iteration count to the colour written for that pixel.
///
/// Called once per pixel from parallel workers, so implementations must be
/// cheap and free of shared mutable state.
pub trait ColourMap {
    fn map(&self, iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
