use crate::core::data::colour::Colour;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("{buffer_size} byte buffer does not fit {width}x{height} RGBA ({expected_size} bytes)")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected_size: usize,
        buffer_size: usize,
    },
}

/// Outcome of [`PixelBuffer::ensure_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferAllocation {
    Reused,
    Reallocated,
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 frame, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; dimensions_to_buffer_size(width, height)],
        }
    }

    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self::new(viewport.width(), viewport.height())
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = dimensions_to_buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                width,
                height,
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn matches(&self, viewport: &Viewport) -> bool {
        self.width == viewport.width() && self.height == viewport.height()
    }

    /// Resize-or-reuse step run once per frame before rendering.
    ///
    /// Keeps the current allocation when the dimensions already match, otherwise
    /// replaces it with a zeroed buffer of exactly `width * height * 4` bytes.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> BufferAllocation {
        if self.width == width && self.height == height {
            return BufferAllocation::Reused;
        }

        *self = Self::new(width, height);
        BufferAllocation::Reallocated
    }

    pub fn ensure_viewport(&mut self, viewport: &Viewport) -> BufferAllocation {
        self.ensure_size(viewport.width(), viewport.height())
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour::new(rgba[0], rgba[1], rgba[2], rgba[3]))
    }
}
