use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished RGBA frame to disk in some image format.
pub trait FilePresenterPort {
    /// Extension appended to output paths that have none.
    fn extension(&self) -> &'static str;

    fn present(&self, frame: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
